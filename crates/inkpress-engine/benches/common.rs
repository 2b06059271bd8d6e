// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **some** *content* and a [link](https://example.com).\nA second line with `inline code`.\n\n* Bullet point\n* Another item\n\n1. First\n2. Second\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_hostile_markup(size: usize) -> String {
    let base = "<p onclick=\"x()\">text <script>alert(1)</script><a href=\"javascript:void(0)\">a</a>\
                <img src=x onerror=y><!-- c --><style>s</style> &amp; < > <b>bold</b></p>\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_article_html(size: usize) -> String {
    let base = "<h2>Heading</h2><p>Some <strong>bold</strong> and <em>em</em> text with \
                <a href=\"https://example.com\">a link</a>.</p><ul><li>one</li><li>two</li></ul>\
                <pre><code>let x = 1 &lt; 2;</code></pre>\n";
    base.repeat(size)
}
