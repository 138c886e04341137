use chrono::{DateTime, Utc};
use colored::*;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};
use vitrine::api::{CmdMessage, MessageLevel, Overview};
use vitrine::auth::Session;
use vitrine::config::VitrineConfig;
use vitrine::model::{PortfolioItem, ServiceItem, SiteSettings, TeamMember};

const LINE_WIDTH: usize = 100;
const MIN_ID_WIDTH: usize = 4;
const TAG_WIDTH: usize = 22;

/// Ids are never cut, so the id column grows to fit the widest one.
fn id_width<'a>(ids: impl Iterator<Item = &'a str>) -> usize {
    ids.map(|id| id.width()).max().unwrap_or(0).max(MIN_ID_WIDTH)
}

/// One table line: full id, main text, right-aligned dimmed tag.
fn row(id: &str, id_width: usize, text: &str, tag: &str) -> String {
    let id_col = format!("{}{}", id, " ".repeat(id_width.saturating_sub(id.width())));

    let tag = truncate_to_width(tag, TAG_WIDTH);
    let available = LINE_WIDTH.saturating_sub(id_width + TAG_WIDTH + 2);
    let text = truncate_to_width(text, available);
    let padding = available.saturating_sub(text.width());

    format!(
        "{} {}{} {:>width$}",
        id_col.yellow(),
        text,
        " ".repeat(padding),
        tag.dimmed(),
        width = TAG_WIDTH
    )
}

pub fn render_portfolio(items: &[PortfolioItem]) -> String {
    let width = id_width(items.iter().map(|i| i.id.as_str()));
    items
        .iter()
        .map(|item| row(&item.id, width, &item.title, &item.category) + "\n")
        .collect()
}

pub fn render_services(items: &[ServiceItem]) -> String {
    let width = id_width(items.iter().map(|i| i.id.as_str()));
    items
        .iter()
        .map(|item| {
            let text = format!("{}  {}", item.title, item.description);
            row(&item.id, width, &text, "") + "\n"
        })
        .collect()
}

pub fn render_team(members: &[TeamMember]) -> String {
    let width = id_width(members.iter().map(|m| m.id.as_str()));
    members
        .iter()
        .map(|member| row(&member.id, width, &member.name, &member.role) + "\n")
        .collect()
}

fn field(output: &mut String, name: &str, value: &str) {
    output.push_str(&format!("{:<12} {}\n", format!("{}:", name).dimmed(), value));
}

pub fn render_portfolio_item(item: &PortfolioItem) -> String {
    let mut output = format!("{} {}\n", item.id.yellow(), item.title.bold());
    field(&mut output, "category", &item.category);
    field(&mut output, "image", &item.image_url);
    for (name, value) in [
        ("desafio", &item.desafio),
        ("solucao", &item.solucao),
        ("resultados", &item.resultados),
    ] {
        if let Some(value) = value {
            field(&mut output, name, value);
        }
    }
    output
}

pub fn render_service(item: &ServiceItem) -> String {
    let mut output = format!("{} {}\n", item.id.yellow(), item.title.bold());
    field(&mut output, "description", &item.description);
    field(&mut output, "icon", &item.icon);
    output
}

pub fn render_team_member(member: &TeamMember) -> String {
    let mut output = format!("{} {}\n", member.id.yellow(), member.name.bold());
    field(&mut output, "role", &member.role);
    field(&mut output, "bio", &member.bio);
    field(&mut output, "image", &member.image_url);
    let socials = &member.socials;
    for (name, value) in [
        ("linkedin", &socials.linkedin),
        ("twitter", &socials.twitter),
        ("github", &socials.github),
    ] {
        if let Some(value) = value {
            field(&mut output, name, value);
        }
    }
    output
}

pub fn render_settings(settings: &SiteSettings) -> String {
    let mut output = String::new();
    field(&mut output, "site-name", &settings.site_name);
    field(&mut output, "whatsapp", &settings.whatsapp_number);
    field(
        &mut output,
        "accent",
        &format!("{} (hsl {})", settings.accent_color, settings.accent_hsl()),
    );
    output
}

pub fn render_session(session: &Session) -> String {
    let since = session
        .logged_in_at
        .map(|at| format!(" since {}", format_time_ago(at)))
        .unwrap_or_default();
    format!(
        "{} ({}){}\n",
        session.email.bold(),
        session.role,
        since.dimmed()
    )
}

pub fn render_overview(overview: &Overview) -> String {
    let mut output = String::new();
    for (name, count) in [
        ("portfolio", overview.portfolio),
        ("services", overview.services),
        ("team", overview.team),
    ] {
        output.push_str(&format!("{:<10} {}\n", name, count.to_string().bold()));
    }
    output
}

pub fn render_config(config: &VitrineConfig) -> String {
    VitrineConfig::keys()
        .iter()
        .filter_map(|key| config.get(key).ok().map(|value| format!("{} = {}\n", key, value)))
        .collect()
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let c = if c == '\n' { ' ' } else { c };
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    timeago::Formatter::new().convert(duration.to_std().unwrap_or_default())
}
