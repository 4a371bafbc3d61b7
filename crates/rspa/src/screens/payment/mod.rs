use rspa_dom::{Element, RQuery};
use rspa_render::{build, Component, RenderError, StyleMap};

const TEMPLATE: &str = include_str!("payment.template.html");
const STYLES: &str = include_str!("payment.module.json");

/// Longest accepted amount, in digits.
pub const AMOUNT_DIGITS: usize = 6;

/// Card payment form with live-formatted inputs.
#[derive(Debug, Clone, Default)]
pub struct Payment;

impl Component for Payment {
    fn render(&self) -> Result<Element, RenderError> {
        let element = build(TEMPLATE, &[], Some(&StyleMap::from_json(STYLES)?))?;
        let form = RQuery::new(element.clone());

        form.find("input[name=card-number]")?.credit_card_input()?;
        form.find("input[name=amount]")?
            .number_input(Some(AMOUNT_DIGITS))?;

        Ok(element)
    }

    fn title(&self) -> Option<String> {
        Some("Payment".to_string())
    }
}
