//! Built-in template sources.
//!
//! Every generated file is an Express/Mongoose stub. Sources use the
//! `{{ENTITY_NAME}}` placeholder (see `svcgen_core::domain::RenderContext`);
//! the database config has no placeholder at all, so its rendered text is the
//! same for every API.
//!
//! # Generated file contracts
//!
//! | Kind                 | Contract                                               |
//! |----------------------|--------------------------------------------------------|
//! | `ServiceController`  | requires `../models/<name>`, exports five empty handlers |
//! | `ServiceModel`       | `<name>Schema` with no fields, exported as a model     |
//! | `ServiceRoutes`      | `POST /`, `GET /`, `GET /:id`, `PUT /:id`, `DELETE /:id` |
//! | `ApiController`      | `hello` handler returning a fixed greeting             |
//! | `ApiRoutes`          | `GET /hello` wired to `hello`                          |
//! | `DatabaseConfig`     | fixed connection string                                |

use svcgen_core::domain::TemplateKind;

/// Connection string written to every generated `config/database.js`.
pub const DEFAULT_DATABASE_URL: &str = "mongodb://localhost:27017/myDatabase";

/// Source text for `kind`.
pub fn source(kind: TemplateKind) -> &'static str {
    match kind {
        TemplateKind::ServiceController => SERVICE_CONTROLLER,
        TemplateKind::ServiceModel => SERVICE_MODEL,
        TemplateKind::ServiceRoutes => SERVICE_ROUTES,
        TemplateKind::ApiController => API_CONTROLLER,
        TemplateKind::ApiRoutes => API_ROUTES,
        TemplateKind::DatabaseConfig => DATABASE_CONFIG,
    }
}

const SERVICE_CONTROLLER: &str = r#"
const {{ENTITY_NAME}} = require('../models/{{ENTITY_NAME}}');

// Create a new record
exports.create = (req, res) => {
  // Creation logic
};

// Get all records
exports.findAll = (req, res) => {
  // Logic to get all records
};

// Get one record by ID
exports.findOne = (req, res) => {
  // Logic to get a record by ID
};

// Update a record by ID
exports.update = (req, res) => {
  // Update logic
};

// Delete a record by ID
exports.delete = (req, res) => {
  // Delete logic
};
"#;

const SERVICE_MODEL: &str = r#"
const mongoose = require('mongoose');

const {{ENTITY_NAME}}Schema = new mongoose.Schema({
  // Schema definition
});

module.exports = mongoose.model('{{ENTITY_NAME}}', {{ENTITY_NAME}}Schema);
"#;

const SERVICE_ROUTES: &str = r#"
const express = require('express');
const router = express.Router();
const {{ENTITY_NAME}}Controller = require('../controllers/{{ENTITY_NAME}}Controller');

// CRUD routes
router.post('/', {{ENTITY_NAME}}Controller.create);
router.get('/', {{ENTITY_NAME}}Controller.findAll);
router.get('/:id', {{ENTITY_NAME}}Controller.findOne);
router.put('/:id', {{ENTITY_NAME}}Controller.update);
router.delete('/:id', {{ENTITY_NAME}}Controller.delete);

module.exports = router;
"#;

const API_CONTROLLER: &str = r#"
exports.hello = (req, res) => {
  res.json({ message: "Hello, World!" });
};
"#;

const API_ROUTES: &str = r#"
const express = require('express');
const router = express.Router();
const apiController = require('../controllers/{{ENTITY_NAME}}Controller');

// Endpoint /hello
router.get('/hello', apiController.hello);

module.exports = router;
"#;

const DATABASE_CONFIG: &str = r#"
// Database connection settings
module.exports = {
  url: 'mongodb://localhost:27017/myDatabase'
};
"#;
