use serde_json::Value;
use tera::{Context, Tera};

use super::Component;
use crate::error::RenderError;

/// Name content files use to embed a code demonstration block.
pub const CODE_DEMO: &str = "CodeDemo";

const TEMPLATE: &str = r#"<div class="code-demo">
{% if title %}  <div class="code-demo__title">{{ title }}</div>
{% endif %}{% if description %}  <p class="code-demo__description">{{ description }}</p>
{% endif %}  <pre class="code-demo__code language-{{ lang }}"><code>{{ code }}</code></pre>
</div>"#;

/// Titled code block with an optional description.
///
/// Props: `code` (required), `lang` (defaults to `text`), `title`,
/// `description`. All values are HTML-escaped.
#[derive(Debug, Default, Clone, Copy)]
pub struct CodeDemo;

impl Component for CodeDemo {
    fn name(&self) -> &'static str {
        CODE_DEMO
    }

    fn render(&self, props: &Value) -> Result<String, RenderError> {
        let code = prop(props, "code").ok_or(RenderError::MissingProp {
            component: CODE_DEMO,
            prop: "code",
        })?;

        let mut context = Context::new();
        context.insert("code", code);
        context.insert("lang", prop(props, "lang").unwrap_or("text"));
        context.insert("title", &prop(props, "title"));
        context.insert("description", &prop(props, "description"));

        Ok(Tera::one_off(TEMPLATE, &context, true)?)
    }
}

fn prop<'a>(props: &'a Value, key: &str) -> Option<&'a str> {
    props.get(key).and_then(Value::as_str)
}
