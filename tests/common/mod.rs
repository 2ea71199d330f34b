//! Shared HTML fixtures for integration tests.

#![allow(dead_code)]

/// A page that satisfies every check.
///
/// Paragraph text totals 104 words with 8 fact tokens (7.7 per 100 words).
pub const WELL_OPTIMIZED_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>What is Acme Widget?</title>
    <meta name="author" content="Jane Smith">
    <meta property="og:site_name" content="Acme">
    <script type="application/ld+json">
    {"@context": "https://schema.org", "@type": "Organization", "name": "Acme", "url": "https://acme.test"}
    </script>
    <script type="application/ld+json">
    {"@context": "https://schema.org", "@type": "FAQPage", "mainEntity": []}
    </script>
</head>
<body>
    <h1>What is Acme Widget?</h1>
    <p>Acme Widget is a deployment tool that cuts setup time by 40% for teams of every size.</p>
    <h2>How it works</h2>
    <p>The agent reads your configuration, builds a plan in 3 seconds, and applies it across 250 servers without downtime or manual steps.</p>
    <h2>Who uses it</h2>
    <p>Since 2019 the product has been trusted by 10,000 customers, including 12 banks, and it processed 5 million deployments in June alone.</p>
    <p>Teams describe the workflow as calm and predictable because every change is reviewed, logged and reversible before it reaches production systems.</p>
    <p>Support engineers answer questions by email and phone, and the documentation covers installation, upgrades, rollback procedures and common troubleshooting scenarios in detail.</p>
    <footer><a href="mailto:hello@acme.test">Contact us</a></footer>
</body>
</html>"#;

/// Wrap body markup in a minimal document.
pub fn page(body: &str) -> String {
    format!("<html><head><title>t</title></head><body>{body}</body></html>")
}

/// A paragraph of `words` words, the first `facts` of which are bare numbers.
pub fn paragraph(words: usize, facts: usize) -> String {
    let tokens: Vec<String> = (0..words)
        .map(|i| if i < facts { (i + 10).to_string() } else { "word".to_string() })
        .collect();
    format!("<p>{}</p>", tokens.join(" "))
}
