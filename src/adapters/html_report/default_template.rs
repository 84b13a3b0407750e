//! Built-in HTML report template.
//!
//! `{{PLACEHOLDER}}` markers are resolved by [`super::resolve`]. A custom
//! template with the same markers can be supplied via `[report]
//! template_path`.

pub fn template() -> &'static str {
    r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{{TITLE}}</title>
<style>
  body { font-family: sans-serif; max-width: 820px; margin: 2em auto; color: #222; }
  table { border-collapse: collapse; margin: 1em 0; }
  td, th { border: 1px solid #ccc; padding: 4px 12px; text-align: left; }
  th { background: #f0f0f0; }
  h2 { margin-top: 1.5em; }
  .columns { display: flex; gap: 2em; }
</style>
</head>
<body>
{{HEADER}}
<div class="columns">
<div>
{{LUMP_SUM_TABLE}}
</div>
<div>
{{RECURRING_TABLE}}
</div>
</div>
<h2>Investment Value Over Time</h2>
{{VALUE_CHART}}
<h2>Purchases</h2>
{{PURCHASE_LOG}}
</body>
</html>
"#
}
