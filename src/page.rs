//! HTML rendering for the single-page UI. Every interpolated value goes
//! through [`escape_html`]; transcript text comes from an external provider
//! and must never reach the page raw.

pub fn escape_html(s: &str) -> String {
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

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>YouTube Transcript Extractor</title>
    <style>
        body {
            background: linear-gradient(135deg, #e3f2fd, #90caf9);
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            padding: 0;
            margin: 0;
        }
        .container {
            max-width: 700px;
            margin: 60px auto;
            background-color: #ffffff;
            padding: 40px;
            border-radius: 20px;
            box-shadow: 0 12px 24px rgba(0, 0, 0, 0.1);
        }
        h2 {
            text-align: center;
            color: #1976d2;
        }
        form {
            text-align: center;
            margin-top: 20px;
        }
        input[type="text"] {
            width: 80%;
            padding: 12px;
            border: 1px solid #90caf9;
            border-radius: 10px;
            font-size: 16px;
        }
        button {
            margin-top: 15px;
            background-color: #1976d2;
            color: white;
            border: none;
            padding: 12px 25px;
            font-size: 16px;
            border-radius: 10px;
            cursor: pointer;
        }
        button:hover {
            background-color: #1565c0;
        }
        pre {
            background: #f5f5f5;
            padding: 20px;
            border-radius: 10px;
            max-height: 400px;
            overflow-y: auto;
            white-space: pre-wrap;
        }
        .error {
            color: red;
            text-align: center;
            margin-top: 10px;
        }
        .download-form {
            text-align: center;
            margin-top: 20px;
        }
    </style>
</head>
<body>
    <div class="container">
        <h2>YouTube Hindi Transcript Extractor</h2>
        <form method="POST" action="/">
            <input type="text" name="url" placeholder="Enter YouTube Video URL" required>
            <br>
            <button type="submit">Get Transcript</button>
        </form>
"#;

const PAGE_FOOT: &str = r#"    </div>
</body>
</html>
"#;

/// Render the index page, optionally populated with a transcript or an
/// error message. With neither set this is the empty input form.
pub fn render_index(transcript: Option<&str>, error: Option<&str>) -> String {
    let mut out = String::from(PAGE_HEAD);
    if let Some(t) = transcript {
        let escaped = escape_html(t);
        out.push_str("        <h3>Transcript:</h3>\n");
        out.push_str("        <pre>");
        out.push_str(&escaped);
        out.push_str("</pre>\n");
        out.push_str("        <div class=\"download-form\">\n");
        out.push_str("            <form method=\"POST\" action=\"/download\">\n");
        // Newlines survive inside a hidden input's value attribute, so the
        // downloaded file matches what is shown in the <pre> block.
        out.push_str("                <input type=\"hidden\" name=\"transcript_text\" value=\"");
        out.push_str(&escaped);
        out.push_str("\">\n");
        out.push_str("                <button type=\"submit\">Download Transcript</button>\n");
        out.push_str("            </form>\n");
        out.push_str("        </div>\n");
    } else if let Some(e) = error {
        out.push_str("        <p class=\"error\">");
        out.push_str(&escape_html(e));
        out.push_str("</p>\n");
    }
    out.push_str(PAGE_FOOT);
    out
}
