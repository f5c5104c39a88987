use itertools::Itertools;

use super::{button, escape};
use crate::model::{EventIcon, EventRecord, SiteInfo, Sponsor};
use crate::site::Action;

const ICON_SVG_OPEN: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" class="icon" fill="none" viewBox="0 0 24 24" stroke="currentColor" stroke-width="2">"#;

/// Inline SVG for an event icon.
pub fn icon(icon: EventIcon) -> String {
    let path = match icon {
        EventIcon::Lightbulb => "M9.663 17h4.673M12 3v1m6.364 1.636l-.707.707M21 12h-1M4 12H3m3.343-5.657l-.707-.707m2.828 9.9a5 5 0 117.072 0l-.548.547A3.374 3.374 0 0014 18.469V19a2 2 0 11-4 0v-.531c0-.895-.356-1.754-.988-2.386l-.548-.547z",
        EventIcon::Code => "M10 20l4-16m4 4l4 4-4 4M6 16l-4-4 4-4",
        EventIcon::ChartBar => "M9 19v-6a2 2 0 00-2-2H5a2 2 0 00-2 2v6a2 2 0 002 2h2a2 2 0 002-2zm0 0V9a2 2 0 012-2h2a2 2 0 012 2v10m-6 0a2 2 0 002 2h2a2 2 0 002-2m0 0V5a2 2 0 012-2h2a2 2 0 012 2v14a2 2 0 01-2 2h-2a2 2 0 01-2-2z",
    };
    format!(
        r#"<span class="icon icon-{icon}">{ICON_SVG_OPEN}<path stroke-linecap="round" stroke-linejoin="round" d="{path}"/></svg></span>"#
    )
}

pub fn header(info: &SiteInfo) -> String {
    format!(
        concat!(
            r#"<header class="site-header"><div class="organisers">"#,
            "<h3>{institution}</h3><h4>{department}</h4>",
            r#"<p class="presenter">{presenter}</p></div>"#,
            "<h1>{name}</h1>",
            r#"<p class="tagline">"{tagline}"</p>"#,
            r#"<div class="date">📅 {date}</div></header>"#
        ),
        institution = escape(info.institution),
        department = escape(info.department),
        presenter = escape(info.presenter),
        name = escape(info.event_name),
        tagline = escape(info.tagline),
        date = escape(info.date),
    )
}

pub fn event_card(event: &EventRecord) -> String {
    format!(
        concat!(
            r#"<article class="event-card" data-event="{id}">"#,
            "{icon}<h3>{title}</h3>",
            r#"<p class="tagline">"{description}"</p>"#,
            r#"<div class="actions">{details}{register}</div></article>"#
        ),
        id = escape(event.id),
        icon = icon(event.icon),
        title = escape(event.title),
        description = escape(event.description),
        details = button(
            "secondary",
            &Action::ViewDetails(event.id.to_string()),
            false,
            "View Details"
        ),
        register = button(
            "primary",
            &Action::Register(event.id.to_string()),
            false,
            "Register Now"
        ),
    )
}

fn section(title: &str, body: &str) -> String {
    format!(
        r#"<div class="detail-section"><h4>{}</h4>{body}</div>"#,
        escape(title)
    )
}

fn bullet_list(items: &[&str]) -> String {
    format!(
        "<ul>{}</ul>",
        items
            .iter()
            .map(|item| format!("<li>{}</li>", escape(item)))
            .join("")
    )
}

fn labelled(label: &str, value: &str) -> String {
    format!("<p><strong>{label}:</strong> {value}</p>")
}

pub fn event_details(event: &EventRecord, info: &SiteInfo) -> String {
    let details = &event.details;

    let mut about = section(
        "About the Event",
        &format!("<p>{}</p>", escape(details.long_description)),
    );
    if let Some(themes) = details.themes {
        about.push_str(&section("Themes", &bullet_list(themes)));
    }
    if let Some(guidelines) = details.guidelines {
        about.push_str(&section("Guidelines", &bullet_list(guidelines)));
    }
    about.push_str(&section("How It Works", &bullet_list(details.how_it_works)));

    let event_info = [
        labelled("Team Size", &escape(details.team_size)),
        labelled("Registration Fee", &escape(details.registration_fee)),
    ]
    .concat();
    let prize = [
        labelled(
            "Total Prize",
            &format!(r#"<span class="prize-total">{}</span>"#, escape(details.prize.total)),
        ),
        labelled("Winner", &escape(details.prize.winner)),
        labelled("Runner Up", &escape(details.prize.runner)),
    ]
    .concat();
    let email = escape(details.contact.email);
    let contact = [
        labelled("Phone", &escape(&details.contact.phones.iter().join(" / "))),
        labelled("Email", &format!(r#"<a href="mailto:{email}">{email}</a>"#)),
    ]
    .concat();

    format!(
        concat!(
            r#"<article class="event-details" data-event="{id}">"#,
            r#"<div class="heading"><div><h2>{title}</h2><p class="tagline">"{description}"</p></div>"#,
            r#"<div class="when"><p class="date">{date}</p><p class="venue">{venue}</p></div></div>"#,
            r#"<div class="columns"><div class="column">{about}</div>"#,
            r#"<div class="column">{info}{prize}{contact}<div class="register">{register}</div></div>"#,
            "</div></article>"
        ),
        id = escape(event.id),
        title = escape(event.title),
        description = escape(event.description),
        date = escape(info.date),
        venue = escape(info.venue),
        about = about,
        info = section("Event Info", &event_info),
        prize = section("Prize Pool", &prize),
        contact = section("Contact", &contact),
        register = button(
            "primary",
            &Action::Register(event.id.to_string()),
            false,
            &format!("Register for {}", escape(event.title))
        ),
    )
}

pub fn sponsors(sponsors: &[Sponsor]) -> String {
    let logos = sponsors
        .iter()
        .map(|sponsor| {
            format!(
                r#"<div class="sponsor"><img src="{}" alt="{} Logo"></div>"#,
                escape(sponsor.logo_url),
                escape(sponsor.name)
            )
        })
        .join("");
    format!(
        r#"<section id="sponsors" class="sponsors"><h2>Our Sponsors</h2><div class="sponsor-grid">{logos}</div></section>"#
    )
}

pub fn scroll_to_top_button(visible: bool) -> String {
    let class = if visible {
        "scroll-top visible"
    } else {
        "scroll-top hidden"
    };
    let arrow = format!(
        r#"{ICON_SVG_OPEN}<path stroke-linecap="round" stroke-linejoin="round" d="M5 15l7-7 7 7"/></svg>"#
    );
    button(class, &Action::ScrollToTop, false, &arrow).replacen(
        "<button ",
        r#"<button aria-label="Scroll to top" "#,
        1,
    )
}

pub fn footer(info: &SiteInfo, year: i32) -> String {
    format!(
        "<footer><p>&copy; {year} {}. All rights reserved.</p></footer>",
        escape(info.organiser)
    )
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use super::*;
    use crate::catalog::{find_event, SITE, SPONSORS};

    fn texts(html: &str, selector: &str) -> Vec<String> {
        let fragment = Html::parse_fragment(html);
        let selector = Selector::parse(selector).unwrap();
        fragment
            .select(&selector)
            .map(|e| e.text().collect::<String>())
            .collect()
    }

    #[test]
    fn test_event_card() {
        let html = event_card(find_event("datathon").unwrap());
        assert_eq!(texts(&html, "h3"), ["Datathon"]);
        assert_eq!(texts(&html, "button"), ["View Details", "Register Now"]);
        assert!(html.contains(r#"data-action="view-details" data-target="datathon""#));
        assert!(html.contains("icon-chart-bar"));
    }

    #[test]
    fn test_event_details_sections() {
        let ideathon = event_details(find_event("ideathon").unwrap(), &SITE);
        let headings = texts(&ideathon, ".detail-section h4");
        assert!(headings.contains(&"Themes".to_string()));
        assert!(!headings.contains(&"Guidelines".to_string()));

        let hackathon = event_details(find_event("hackathon").unwrap(), &SITE);
        let headings = texts(&hackathon, ".detail-section h4");
        assert_eq!(
            headings,
            [
                "About the Event",
                "Guidelines",
                "How It Works",
                "Event Info",
                "Prize Pool",
                "Contact"
            ]
        );
        assert!(hackathon.contains("+91 8431614069 / +91 9446114441"));
        assert!(hackathon.contains(r#"href="mailto:iseinnovisions@gmail.com""#));
        assert_eq!(texts(&hackathon, ".prize-total"), ["₹40,000"]);
    }

    #[test]
    fn test_sponsors() {
        let html = sponsors(&SPONSORS);
        let fragment = Html::parse_fragment(&html);
        let img = Selector::parse("img").unwrap();
        let alts: Vec<_> = fragment
            .select(&img)
            .filter_map(|e| e.value().attr("alt"))
            .collect();
        assert_eq!(alts.len(), 5);
        assert_eq!(alts[1], "JPQ TECH BOOTCAMP Logo");
    }

    #[test]
    fn test_scroll_button_visibility() {
        assert!(scroll_to_top_button(true).contains("scroll-top visible"));
        assert!(scroll_to_top_button(false).contains("scroll-top hidden"));
        assert!(scroll_to_top_button(false).contains(r#"data-action="scroll-to-top""#));
    }

    #[test]
    fn test_header_escapes() {
        let html = header(&SITE);
        assert!(html.contains("INFORMATION SCIENCE &amp; ENGINEERING"));
        assert_eq!(texts(&html, "h1"), ["TECH TRIAD 2025"]);
    }
}
