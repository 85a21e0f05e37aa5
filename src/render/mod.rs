//! Server-side HTML for the lookup page.

use std::borrow::Cow;
use std::fmt::Write as _;

use crate::items::{ItemDetail, ItemSlot};
use crate::lookup::ResolvedProfile;
use crate::regions::Region;

mod profile;

const STYLE: &str = include_str!("style.css");

/// Everything one page render needs.
#[derive(Debug, Default)]
pub struct Page<'a> {
    pub uid: &'a str,
    pub region: &'a str,
    pub error: Option<&'a str>,
    pub profile: Option<&'a ResolvedProfile>,
}

pub fn escape(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len() + 16);
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

pub fn render_page(page: &Page<'_>) -> String {
    let mut html = String::with_capacity(16 * 1024);

    let _ = write!(
        html,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Free Fire Player Lookup - Complete Stats</title>
<meta name="description" content="Free Fire player statistics lookup with data from all regions.">
<link href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.0/css/all.min.css" rel="stylesheet">
<style>{STYLE}</style>
</head>
<body>
<main class="container">
<header class="hero"><h1><i class="fas fa-fire"></i> Free Fire Player Lookup</h1>
<p>Stats, ranks and equipment for any account.</p></header>
"#
    );

    render_form(&mut html, page.uid, page.region);

    if let Some(error) = page.error {
        let _ = write!(
            html,
            r#"<section class="card error"><i class="fas fa-exclamation-triangle"></i><p>{}</p></section>
"#,
            escape(error)
        );
    }

    if let Some(profile) = page.profile {
        if profile.record.account.is_some() {
            profile::render_profile(&mut html, profile, page.uid, page.region);
        } else {
            html.push_str(
                r#"<section class="card notice"><p>No profile found for this UID and region.</p></section>
"#,
            );
        }
    }

    html.push_str("</main>\n</body>\n</html>\n");
    html
}

fn render_form(html: &mut String, uid: &str, selected: &str) {
    html.push_str(
        r#"<section class="card">
<form method="post" action="/" class="lookup-form">
<label for="region">Server region</label>
<select id="region" name="region" required>
"#,
    );

    for region in Region::ALL {
        let _ = writeln!(
            html,
            r#"<option value="{code}"{sel}>{name}</option>"#,
            code = region.code(),
            sel = if region.code() == selected { " selected" } else { "" },
            name = escape(region.display_name()),
        );
    }

    let _ = write!(
        html,
        r#"</select>
<label for="uid">Player UID</label>
<input id="uid" name="uid" type="text" inputmode="numeric" placeholder="Enter player UID" value="{}" required>
<button type="submit"><i class="fas fa-search"></i> Search player</button>
</form>
</section>
"#,
        escape(uid)
    );
}

fn item_icon(html: &mut String, item: Option<&ItemDetail>, slot: ItemSlot, size: &str) {
    match item.and_then(|i| i.image_url.as_deref().map(|url| (i, url))) {
        Some((item, url)) => {
            let _ = write!(
                html,
                r#"<img src="{}" alt="{}" class="icon {}" loading="lazy">"#,
                escape(url),
                escape(&item.description),
                size
            );
        }
        None => {
            let _ = write!(
                html,
                r#"<div class="icon placeholder {}"><i class="{}"></i></div>"#,
                size,
                slot.fallback_icon()
            );
        }
    }
}
