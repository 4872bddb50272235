// Engine Test Modules
