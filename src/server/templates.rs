//! HTML templates for the web interface.
//!
//! Pages are assembled as strings; everything user-controlled goes through
//! [`escape_html`] before interpolation.

use chrono::{DateTime, Utc};

use crate::models::{Check, Url, UrlWithLatestCheck};

/// Escape text for interpolation into HTML body or attribute context.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
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

fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M").to_string()
}

/// Base HTML template.
pub fn base_template(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{} - pagecheck</title>
    <link rel="stylesheet" href="/static/style.css">
</head>
<body>
    <header id="main-header">
        <nav>
            <a href="/" class="logo">pagecheck</a>
            <a href="/urls">urls</a>
        </nav>
    </header>
    <main>
        <h1>{}</h1>
        {}
    </main>
</body>
</html>"#,
        title, title, content
    )
}

/// Known flash codes carried across redirects, rendered as banners.
fn flash_banner(code: &str) -> String {
    let (class, message) = match code {
        "added" => ("success", "Page added"),
        "exists" => ("info", "Page already exists"),
        "checked" => ("success", "Page checked"),
        "check_failed" => ("danger", "Could not connect to the page"),
        _ => return String::new(),
    };
    format!(r#"<div class="flash flash-{}">{}</div>"#, class, message)
}

/// Render the submission form. `search` re-displays rejected input; `error`
/// is the inline validation message.
pub fn index_page(search: Option<&str>, error: Option<&str>) -> String {
    let error_banner = error
        .map(|e| format!(r#"<div class="flash flash-danger">Invalid URL: {}</div>"#, escape_html(e)))
        .unwrap_or_default();

    let content = format!(
        r#"
    {}
    <form action="/urls" method="post" class="url-form">
        <input type="text" name="url" value="{}" placeholder="https://example.com" autofocus>
        <button type="submit">Check</button>
    </form>
    "#,
        error_banner,
        escape_html(search.unwrap_or(""))
    );

    base_template("Add a page", &content)
}

/// Render the URL listing with each row's latest check.
pub fn urls_page(urls: &[UrlWithLatestCheck]) -> String {
    let mut rows = String::new();

    for url in urls {
        let last_checked = url
            .last_checked_at
            .as_ref()
            .map(format_datetime)
            .unwrap_or_else(|| "Never".to_string());
        let last_status = url
            .last_status_code
            .map(|s| s.to_string())
            .unwrap_or_default();

        rows.push_str(&format!(
            r#"
        <tr>
            <td><a href="/urls/{}">{}</a></td>
            <td>{}</td>
            <td>{}</td>
        </tr>
        "#,
            url.id,
            escape_html(&url.name),
            last_checked,
            last_status
        ));
    }

    let content = format!(
        r#"
    <table class="listing">
        <thead>
            <tr>
                <th>URL</th>
                <th>Last checked</th>
                <th>Status</th>
            </tr>
        </thead>
        <tbody>
            {}
        </tbody>
    </table>
    "#,
        rows
    );

    base_template("Tracked pages", &content)
}

/// Render the detail page: the URL plus its check history, newest first.
pub fn url_page(url: &Url, checks: &[Check], flash: Option<&str>) -> String {
    let banner = flash.map(flash_banner).unwrap_or_default();

    let mut rows = String::new();
    for check in checks {
        let status = check
            .status_code
            .map(|s| s.to_string())
            .unwrap_or_else(|| "—".to_string());

        rows.push_str(&format!(
            r#"
        <tr>
            <td>{}</td>
            <td>{}</td>
            <td>{}</td>
            <td>{}</td>
            <td>{}</td>
            <td>{}</td>
        </tr>
        "#,
            check.id,
            status,
            escape_html(check.title.as_deref().unwrap_or("")),
            escape_html(check.h1.as_deref().unwrap_or("")),
            escape_html(check.description.as_deref().unwrap_or("")),
            format_datetime(&check.created_at)
        ));
    }

    let content = format!(
        r#"
    {}
    <table class="listing">
        <tbody>
            <tr><th>Name</th><td>{}</td></tr>
            <tr><th>Added</th><td>{}</td></tr>
        </tbody>
    </table>
    <form action="/urls/{}/checks" method="post">
        <button type="submit">Run check</button>
    </form>
    <h2>Checks</h2>
    <table class="listing">
        <thead>
            <tr>
                <th>ID</th>
                <th>Status</th>
                <th>Title</th>
                <th>H1</th>
                <th>Description</th>
                <th>Created</th>
            </tr>
        </thead>
        <tbody>
            {}
        </tbody>
    </table>
    "#,
        banner,
        escape_html(&url.name),
        format_datetime(&url.created_at),
        url.id,
        rows
    );

    base_template(&url.name, &content)
}

/// 404 page for unknown URL ids.
pub fn not_found() -> String {
    base_template(
        "Page not found",
        r#"<p>No such URL is tracked here.</p><p><a href="/urls">Back to the list</a></p>"#,
    )
}

/// Generic 500 page.
pub fn server_error() -> String {
    base_template(
        "Something went wrong",
        r#"<p>An internal error occurred. Try again.</p>"#,
    )
}
