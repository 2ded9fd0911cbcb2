//! Simple variable substitution renderer.

use svcgen_core::{
    application::ports::TemplateRenderer,
    domain::{RenderContext, TemplateKind},
};
use tracing::trace;

use crate::builtin_templates;

/// Renderer over the built-in sources using `{{VARIABLE}}` substitution.
#[derive(Debug, Clone, Copy)]
pub struct SimpleRenderer;

impl SimpleRenderer {
    /// Create a new simple renderer.
    pub fn new() -> Self {
        Self
    }
}

impl Default for SimpleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for SimpleRenderer {
    fn render(&self, kind: TemplateKind, context: &RenderContext) -> String {
        trace!(%kind, entity = context.entity_name(), "Rendering template");
        context.render(builtin_templates::source(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin_templates::DEFAULT_DATABASE_URL;

    fn render(kind: TemplateKind, name: &str) -> String {
        SimpleRenderer::new().render(kind, &RenderContext::new(name))
    }

    #[test]
    fn service_routes_wire_five_crud_handlers() {
        let routes = render(TemplateKind::ServiceRoutes, "Order");

        assert!(routes.contains("require('../controllers/OrderController')"));
        let wired: Vec<&str> = routes
            .lines()
            .filter(|l| l.starts_with("router."))
            .collect();
        assert_eq!(
            wired,
            vec![
                "router.post('/', OrderController.create);",
                "router.get('/', OrderController.findAll);",
                "router.get('/:id', OrderController.findOne);",
                "router.put('/:id', OrderController.update);",
                "router.delete('/:id', OrderController.delete);",
            ]
        );
        assert!(routes.contains("module.exports = router;"));
    }

    #[test]
    fn service_controller_exports_five_stub_handlers() {
        let controller = render(TemplateKind::ServiceController, "Order");

        assert!(controller.contains("const Order = require('../models/Order');"));
        for handler in ["create", "findAll", "findOne", "update", "delete"] {
            assert!(
                controller.contains(&format!("exports.{handler} = (req, res) => {{")),
                "missing {handler}"
            );
        }
        assert!(!controller.contains("res."));
    }

    #[test]
    fn service_model_binds_schema_to_name() {
        let model = render(TemplateKind::ServiceModel, "Order");
        assert!(model.contains("const OrderSchema = new mongoose.Schema({"));
        assert!(model.contains("mongoose.model('Order', OrderSchema)"));
    }

    #[test]
    fn api_files_for_widget() {
        let controller = render(TemplateKind::ApiController, "Widget");
        assert!(controller.contains("exports.hello"));
        assert!(controller.contains(r#"res.json({ message: "Hello, World!" });"#));

        let routes = render(TemplateKind::ApiRoutes, "Widget");
        assert!(routes.contains("router.get('/hello', apiController.hello);"));
        assert!(routes.contains("require('../controllers/WidgetController')"));

        let config = render(TemplateKind::DatabaseConfig, "Widget");
        assert!(config.contains(DEFAULT_DATABASE_URL));
        assert!(!config.contains("Widget"));
        assert_eq!(config, render(TemplateKind::DatabaseConfig, "Other"));
    }

    #[test]
    fn rendering_is_verbatim_and_deterministic() {
        let a = render(TemplateKind::ServiceModel, "it's");
        assert!(a.contains("mongoose.model('it's', it'sSchema)"));
        assert_eq!(a, render(TemplateKind::ServiceModel, "it's"));
    }
}
