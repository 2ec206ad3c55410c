//! Listener for view creation.
//!
//! Replacing the listener is the only way for an embedding application to
//! observe or augment view creation; the deployment logic itself stays free
//! of per-application special cases.

use crate::view::View;

/// Hook called after a view has been created.
pub trait CreateViewListener {
    /// Statements to run as part of view creation, after the view itself has
    /// been created. Order is preserved.
    fn register_view(&self, view: &View) -> Vec<String>;
}

/// The default listener: no supplementary statements.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpCreateViewListener;

impl CreateViewListener for NoOpCreateViewListener {
    fn register_view(&self, _view: &View) -> Vec<String> {
        Vec::new()
    }
}

/// Owns the listener and exposes the fixed invocation point used by the view
/// deployment operation.
pub struct ViewDeploymentHelper {
    listener: Box<dyn CreateViewListener>,
}

impl Default for ViewDeploymentHelper {
    fn default() -> Self {
        ViewDeploymentHelper::new(Box::new(NoOpCreateViewListener))
    }
}

impl ViewDeploymentHelper {
    pub fn new(listener: Box<dyn CreateViewListener>) -> Self {
        ViewDeploymentHelper { listener }
    }

    /// Called synchronously, once, immediately after the primary CREATE VIEW
    /// statement of a deployment.
    pub fn statements_after_create(&self, view: &View) -> Vec<String> {
        let statements = self.listener.register_view(view);
        tracing::debug!(
            view = %view.name,
            statements = statements.len(),
            "collected post-create statements"
        );
        statements
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_default_listener_returns_no_statements() {
        let helper = ViewDeploymentHelper::default();
        let view = View {
            name: "all_employees".to_string(),
            columns: vec!["id".to_string(), "name".to_string()],
        };
        assert!(helper.statements_after_create(&view).is_empty());
    }

    #[test]
    fn a_replaced_listener_supplies_ordered_statements() {
        struct GrantingListener;
        impl CreateViewListener for GrantingListener {
            fn register_view(&self, view: &View) -> Vec<String> {
                vec![
                    format!("GRANT SELECT ON {} TO reporting", view.name),
                    format!("COMMENT ON VIEW {} IS 'managed'", view.name),
                ]
            }
        }

        let helper = ViewDeploymentHelper::new(Box::new(GrantingListener));
        let view = View {
            name: "all_employees".to_string(),
            columns: vec![],
        };
        assert_eq!(
            helper.statements_after_create(&view),
            vec![
                "GRANT SELECT ON all_employees TO reporting".to_string(),
                "COMMENT ON VIEW all_employees IS 'managed'".to_string(),
            ]
        );
    }
}
