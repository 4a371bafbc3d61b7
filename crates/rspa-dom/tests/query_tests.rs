//! Integration tests for the RQuery facade
//!
//! Covers lookup failures, structural insertion, content getters/setters,
//! styling, attributes and the input helpers.

use std::cell::Cell;
use std::rc::Rc;

use pretty_assertions::assert_eq;
use rspa_dom::*;

fn page() -> Document {
    Document::with_body(
        r#"<div id="app"><h1 class="title">Home</h1><form><input id="qty" type="number"><input id="card" type="text"><input id="plain"><textarea id="note"></textarea></form></div>"#,
    )
    .unwrap()
}

fn type_into(input: &Element, raw: &str) {
    input.set_value(raw);
    input.dispatch_event(&Event::new(EventType::Input));
}

#[test]
fn test_select_missing_element_fails() {
    let document = page();
    assert_eq!(
        RQuery::select(&document, "#nope"),
        Err(DomError::NotFound {
            selector: "#nope".to_string()
        })
    );
}

#[test]
fn test_select_invalid_selector_fails() {
    let document = page();
    assert!(matches!(
        RQuery::select(&document, "div >"),
        Err(DomError::InvalidSelector { .. })
    ));
}

#[test]
fn test_find_is_scoped_to_descendants() {
    let document = page();
    let form = RQuery::select(&document, "form").unwrap();
    assert!(form.find("input").is_ok());
    assert!(matches!(form.find("h1"), Err(DomError::NotFound { .. })));
}

#[test]
fn test_append_and_before() {
    let document = page();
    let app = RQuery::select(&document, "#app").unwrap();

    let footer = document.create_element("footer");
    app.append(&footer).unwrap();
    let banner = document.create_element("aside");
    RQuery::new(footer.clone()).before(&banner).unwrap();

    let tags: Vec<String> = app
        .element()
        .child_elements()
        .iter()
        .map(|el| el.tag_name().to_string())
        .collect();
    assert_eq!(tags, vec!["h1", "form", "aside", "footer"]);
}

#[test]
fn test_before_without_parent_fails() {
    let detached = RQuery::new(Element::new("div"));
    assert_eq!(
        detached.before(&Element::new("p")).err(),
        Some(DomError::NoParent)
    );
}

#[test]
fn test_html_and_text_getters_and_setters() {
    let document = page();
    let title = RQuery::select(&document, "h1").unwrap();
    assert_eq!(title.text(), "Home");

    title.set_html("<em>Hi</em> there").unwrap();
    assert_eq!(title.html(), "<em>Hi</em> there");
    assert_eq!(title.text(), "Hi there");

    title.set_text("<b>raw</b>");
    assert_eq!(title.html(), "&lt;b&gt;raw&lt;/b&gt;");
}

#[test]
fn test_click_handler_runs_on_click() {
    let document = page();
    let clicks = Rc::new(Cell::new(0));
    let counter = Rc::clone(&clicks);
    let title = RQuery::select(&document, "h1").unwrap();
    title.click(move |_| counter.set(counter.get() + 1));

    title.element().click();
    title.element().click();
    assert_eq!(clicks.get(), 2);
}

#[test]
fn test_css_requires_property_and_value() {
    let document = page();
    let title = RQuery::select(&document, "h1").unwrap();
    title.css("color", "blue").unwrap().css("fontSize", "2rem").unwrap();
    assert_eq!(
        title.attr("style").as_deref(),
        Some("color: blue; font-size: 2rem;")
    );

    assert!(matches!(
        title.css("", "blue"),
        Err(DomError::InvalidArgument(_))
    ));
    assert!(matches!(
        title.css("color", ""),
        Err(DomError::InvalidArgument(_))
    ));
}

#[test]
fn test_css_rejects_smuggled_declarations() {
    let document = page();
    let title = RQuery::select(&document, "h1").unwrap();
    title.css("color", "blue").unwrap();

    assert!(matches!(
        title.css("color", "red; display: none"),
        Err(DomError::InvalidArgument(_))
    ));
    assert!(matches!(
        title.css("color: red; display", "none"),
        Err(DomError::InvalidArgument(_))
    ));
    assert_eq!(title.attr("style").as_deref(), Some("color: blue;"));
    assert_eq!(title.element().style_property("display"), None);
}

#[test]
fn test_add_and_remove_class_single_or_list() {
    let document = page();
    let title = RQuery::select(&document, "h1").unwrap();

    title.add_class("big").unwrap().add_class(["a", "b"]).unwrap();
    assert_eq!(title.element().class_list(), vec!["title", "big", "a", "b"]);

    title.remove_class(vec!["a", "title"]).unwrap();
    title.remove_class("b").unwrap();
    assert_eq!(title.element().class_list(), vec!["big"]);

    assert!(title.add_class("").is_err());
}

#[test]
fn test_attr_getter_and_setter() {
    let document = page();
    let title = RQuery::select(&document, "h1").unwrap();
    assert_eq!(title.attr("data-x"), None);

    title.set_attr("data-x", "1").unwrap();
    assert_eq!(title.attr("data-x").as_deref(), Some("1"));
    assert!(title.set_attr("", "1").is_err());
}

#[test]
fn test_input_sets_attributes_and_listener() {
    let document = page();
    let seen = Rc::new(Cell::new(false));
    let flag = Rc::clone(&seen);
    let input = RQuery::select(&document, "#plain").unwrap();

    input
        .input(
            InputOptions::new()
                .attribute("placeholder", "Name")
                .attribute("maxlength", "20")
                .on_input(move |_| flag.set(true)),
        )
        .unwrap();

    assert_eq!(input.attr("placeholder").as_deref(), Some("Name"));
    type_into(input.element(), "x");
    assert!(seen.get());
}

#[test]
fn test_input_helpers_reject_other_elements() {
    let document = page();
    let note = RQuery::select(&document, "#note").unwrap();
    assert_eq!(
        note.input(InputOptions::new()).err(),
        Some(DomError::WrongElement {
            expected: "an input".to_string()
        })
    );

    let text = RQuery::select(&document, "#card").unwrap();
    assert!(matches!(
        text.number_input(None),
        Err(DomError::WrongElement { .. })
    ));

    let number = RQuery::select(&document, "#qty").unwrap();
    assert!(matches!(
        number.credit_card_input(),
        Err(DomError::WrongElement { .. })
    ));
}

#[test]
fn test_number_input_strips_then_truncates() {
    let document = page();
    let qty = RQuery::select(&document, "#qty").unwrap();
    qty.number_input(Some(4)).unwrap();

    type_into(qty.element(), "12a3456");
    assert_eq!(qty.element().value(), "1234");
}

#[test]
fn test_number_input_without_limit_still_strips() {
    let document = page();
    let qty = RQuery::select(&document, "#qty").unwrap();
    qty.number_input(None).unwrap();

    type_into(qty.element(), "4x2");
    assert_eq!(qty.element().value(), "42");
}

#[test]
fn test_credit_card_input_formats_live_value() {
    let document = page();
    let card = RQuery::select(&document, "#card").unwrap();
    card.credit_card_input().unwrap();

    type_into(card.element(), "41111");
    assert_eq!(card.element().value(), "4111-1");

    // Editing an already formatted value re-groups it.
    type_into(card.element(), "4111-11111111-1111 9999");
    assert_eq!(card.element().value(), "4111-1111-1111-1111");
}
