//! HTML rendering of the product page

use crate::Product;

const STYLE: &str = r#"
    body { font-family: Arial, sans-serif; margin: 0; padding: 20px; background: #f2f2f2; }
    .container { max-width: 600px; margin: 0 auto; background: white; padding: 20px; border-radius: 5px; box-shadow: 0 0 10px rgba(0,0,0,0.1); }
    h1 { color: #333; }
    form { display: flex; gap: 10px; margin-bottom: 20px; flex-wrap: wrap; }
    input { flex: 1; padding: 10px; border: 1px solid #ddd; border-radius: 3px; min-width: 150px; }
    button[type="submit"] { flex: 0 0 auto; padding: 10px 20px; background: #4CAF50; color: white; border: none; border-radius: 3px; cursor: pointer; font-weight: bold; }
    button[type="submit"]:hover { background: #45a049; }
    .product-list { list-style: none; padding: 0; }
    .product-item { display: flex; justify-content: space-between; align-items: center; padding: 10px; margin: 10px 0; border: 1px solid #ddd; border-radius: 3px; background: #fafafa; }
    .delete-button { background: #ff6347; color: white; border: none; padding: 5px 10px; border-radius: 3px; cursor: pointer; }
    .delete-button:hover { background: #d84315; }
"#;

const ADD_FORM: &str = r#"
    <h2>Adicionar Novo Produto</h2>
    <form action="/adicionar_produto" method="post">
      <input type="text" name="productName" placeholder="Nome do produto" required>
      <input type="number" name="productQuantity" placeholder="Quantidade" min="1" required>
      <button type="submit">Adicionar</button>
    </form>
"#;

/// Escape the five HTML-significant characters.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render the complete product page.
///
/// Names are escaped; ids and quantities are integers and go in verbatim.
pub fn render_page(products: &[Product]) -> String {
    let mut html = String::with_capacity(4096 + products.len() * 384);

    html.push_str(
        r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Gerenciador de Produtos</title>
  <style>"#,
    );
    html.push_str(STYLE);
    html.push_str(
        r#"  </style>
</head>
<body>
  <div class="container">
    <h1>Gerenciador de Produtos</h1>
"#,
    );
    html.push_str(ADD_FORM);

    html.push_str(&format!(
        "\n    <h2>Lista de Produtos ({})</h2>\n",
        products.len()
    ));

    if products.is_empty() {
        html.push_str("    <p>Nenhum produto cadastrado</p>\n");
    } else {
        html.push_str("    <ul class=\"product-list\">");
        for product in products {
            html.push_str(&render_item(product));
        }
        html.push_str("</ul>\n");
    }

    html.push_str("  </div>\n</body>\n</html>");
    html
}

fn render_item(product: &Product) -> String {
    format!(
        r#"
    <li class="product-item">
      <div><strong>{name}</strong> - Qtd: {quantity}</div>
      <form action="/excluir_produto" method="post" style="margin:0;">
        <input type="hidden" name="productId" value="{id}">
        <button type="submit" class="delete-button">Excluir</button>
      </form>
    </li>
"#,
        name = escape_html(&product.name),
        quantity = product.quantity,
        id = product.id,
    )
}
