//! Integration tests for the demo app
//!
//! Boot the whole stack (document, router, layout, screens) and drive it the
//! way a user would: clicking links and buttons and typing into inputs.

use pretty_assertions::assert_eq;
use rspa::components::{LOADER_SELECTOR, SIGNED_OUT_PATH};
use rspa::screens::AMOUNT_DIGITS;
use rspa::{App, Config};
use rspa_dom::{Element, Event, EventType};
use rstest::rstest;

fn boot() -> App {
    App::boot(&Config::default()).unwrap()
}

fn select(app: &App, selector: &str) -> Element {
    app.document()
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("nothing matches {selector}"))
}

fn type_into(input: &Element, raw: &str) {
    input.set_value(raw);
    input.dispatch_event(&Event::new(EventType::Input));
}

#[test]
fn test_boot_mounts_shell_and_home() {
    let app = boot();

    assert_eq!(app.router().current_path(), "/");
    assert_eq!(app.document().title(), "Home");
    assert!(app.document().query_selector("#app > .layout_Lq2x > header.header_h7Tn").unwrap().is_some());
    assert!(app.document().query_selector("main .home_Xe81").unwrap().is_some());
    assert!(app.document().query_selector(LOADER_SELECTOR).unwrap().is_some());
}

#[test]
fn test_placeholders_are_all_resolved() {
    let app = boot();
    let html = app.root_html();
    assert!(!html.contains("<component"), "unresolved placeholder in {html}");
}

#[test]
fn test_home_heading_is_blue() {
    let app = boot();
    let heading = select(&app, "main h1");
    assert_eq!(heading.style_property("color").as_deref(), Some("blue"));
}

#[test]
fn test_user_items_use_scoped_classes() {
    let app = boot();

    let in_header = select(&app, "header .user-item_k3Pe");
    assert!(!in_header.has_class("gray_k3Pe"));
    assert_eq!(
        select(&app, "header .user-item_k3Pe img").attr("alt").as_deref(),
        Some("Guffi")
    );

    let in_contacts = select(&app, ".contacts_Xe81 .user-item_k3Pe");
    assert!(in_contacts.has_class("gray_k3Pe"));
    assert_eq!(in_contacts.text_content().trim(), "Guffi");
}

#[test]
fn test_search_input_is_configured() {
    let app = boot();
    let search = select(&app, "header input[type=search]");
    assert_eq!(search.attr("placeholder").as_deref(), Some("Search contacts"));
}

#[test]
fn test_link_in_screen_opens_payment() {
    let app = boot();
    select(&app, "main a[href='/payment']").click();

    assert_eq!(app.router().current_path(), "/payment");
    assert_eq!(app.document().title(), "Payment");
    assert!(app.document().hard_navigations().is_empty());
}

#[test]
fn test_logo_returns_home() {
    let app = boot();
    app.navigate("/payment").unwrap();

    select(&app, ".logo_a0Zs .mark_a0Zs").click();

    assert_eq!(app.router().current_path(), "/");
    assert_eq!(app.router().mount_count(), 3);
}

#[test]
fn test_logout_button_navigates_to_auth() {
    let app = boot();
    select(&app, ".logout-button").click();

    assert_eq!(app.router().current_path(), SIGNED_OUT_PATH);
    assert_eq!(app.document().title(), "Signed out");
    assert_eq!(select(&app, "main h1").text_content(), "Signed out");
}

#[test]
fn test_header_survives_navigation() {
    let app = boot();
    let header = select(&app, "header");

    app.navigate("/payment").unwrap();
    app.navigate("/missing").unwrap();

    assert_eq!(select(&app, "header"), header);
    assert_eq!(select(&app, "main h1").text_content(), "404");
}

#[rstest]
#[case("4111111111111111", "4111-1111-1111-1111")]
#[case("4111 1111 1111 1111 0000", "4111-1111-1111-1111")]
#[case("41111", "4111-1")]
#[case("abc", "")]
fn test_card_number_field(#[case] typed: &str, #[case] shown: &str) {
    let app = boot();
    app.navigate("/payment").unwrap();

    let card = select(&app, "input[name=card-number]");
    type_into(&card, typed);
    assert_eq!(card.value(), shown);
}

#[test]
fn test_amount_field_keeps_digits_up_to_limit() {
    let app = boot();
    app.navigate("/payment").unwrap();

    let amount = select(&app, "input[name=amount]");
    type_into(&amount, "12a3456789");
    assert_eq!(amount.value().len(), AMOUNT_DIGITS);
    assert_eq!(amount.value(), "123456");
}

#[test]
fn test_back_restores_previous_screen() {
    let app = boot();
    app.navigate("/payment").unwrap();

    assert!(app.back());
    assert_eq!(app.router().current_path(), "/");
    assert_eq!(app.document().title(), "Home");
    assert!(!app.back());
}

#[test]
fn test_config_drives_router() {
    let mut config = Config::default();
    config.app.entry_path = "/payment".to_string();
    config.router.title_suffix = " | Shop".to_string();

    let app = App::boot_with_body(&config, r#"<div id="app"></div>"#).unwrap();
    assert_eq!(app.document().title(), "Payment | Shop");
}

#[test]
fn test_missing_root_fails_boot() {
    let err = App::boot_with_body(&Config::default(), "<div id=\"other\"></div>").unwrap_err();
    assert_eq!(err.to_string(), "Failed to start the router");
    assert!(format!("{err:#}").contains("Mount root #app not found"));
}

#[test]
fn test_missing_index_page_fails_boot() {
    let mut config = Config::default();
    config.app.index_html = Some("does/not/exist.html".to_string());
    assert!(App::boot(&config).is_err());
}

#[test]
fn test_shutdown_stops_interception() {
    let app = boot();
    app.shutdown();

    select(&app, "main a[href='/payment']").click();

    assert_eq!(app.router().current_path(), "/");
    assert_eq!(app.document().hard_navigations(), vec!["/payment".to_string()]);
}
