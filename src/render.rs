//! HTML page rendering for the product listing.

use crate::error::SetupError;
use crate::model::Product;
use std::path::Path;

const ROWS_MARKER: &str = "{{rows}}";

/// Page templates read once at startup. A missing template file is a deploy
/// configuration error, so loading failures are fatal rather than per-request.
#[derive(Debug)]
pub struct Templates {
    products: String,
}

impl Templates {
    /// Read `products.html` from `dir`. The template must contain a
    /// `{{rows}}` marker where the listing table body is inserted.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, SetupError> {
        let path = dir.as_ref().join("products.html");
        let products = std::fs::read_to_string(&path).map_err(|source| SetupError::Template {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self { products })
    }

    /// Render the listing page. Pure presentation; field values are
    /// HTML-escaped.
    pub fn render_products(&self, products: &[Product]) -> String {
        let mut rows = String::new();
        if products.is_empty() {
            rows.push_str("<tr><td colspan=\"4\" class=\"empty\">No products yet</td></tr>\n");
        }
        for p in products {
            rows.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                p.id,
                escape_html(&p.name),
                p.price,
                escape_html(&p.description),
            ));
        }
        self.products.replace(ROWS_MARKER, rows.trim_end())
    }
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn templates() -> Templates {
        Templates {
            products: "<table>{{rows}}</table>".into(),
        }
    }

    fn product(name: &str, description: &str) -> Product {
        Product {
            id: 1,
            name: name.into(),
            price: 1.5,
            description: description.into(),
        }
    }

    #[test]
    fn renders_one_row_per_product() {
        let html = templates().render_products(&[product("Pen", "Blue pen")]);
        assert!(html.contains("<td>Pen</td>"));
        assert!(html.contains("<td>1.5</td>"));
        assert!(html.contains("<td>Blue pen</td>"));
    }

    #[test]
    fn escapes_markup_in_fields() {
        let html = templates().render_products(&[product("<script>", "a & b")]);
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("a &amp; b"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn empty_store_renders_placeholder_row() {
        let html = templates().render_products(&[]);
        assert!(html.contains("No products yet"));
    }

    #[test]
    fn missing_template_file_fails_load() {
        let err = Templates::load("no-such-dir").unwrap_err();
        assert!(matches!(err, SetupError::Template { .. }));
    }
}
