//! Static instructional copy shown on each screen.

use order_core::{ProductLine, Screen};

/// A reference screenshot the operator can open for guidance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceImage {
    pub caption: &'static str,
    pub url: &'static str,
}

/// Everything the presenter writes on a screen besides the controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenContent {
    pub instructions: &'static str,
    pub example: Option<ReferenceImage>,
    /// Pricing-policy rules, shown as a bulleted list.
    pub policy: &'static [&'static str],
    /// Highlighted notice below the instructions.
    pub notice: Option<&'static str>,
}

const PHONE_SEARCH_EXAMPLE: ReferenceImage = ReferenceImage {
    caption: "How to search a customer record by phone number in the ERP",
    url: "https://i.ibb.co/hRR2y3pB/cel.png",
};

const PURCHASE_HISTORY_EXAMPLE: ReferenceImage = ReferenceImage {
    caption: "How to open the customer's purchase history from an order",
    url: "https://i.ibb.co/WW73T9Sk/historico.png",
};

const SELLER_FIELD_EXAMPLE: ReferenceImage = ReferenceImage {
    caption: "How to tell a Line A from a Line B customer by the seller field",
    url: "https://i.ibb.co/dwS10YNH/vendedor.png",
};

const COUNTER_REGISTRATION_EXAMPLE: ReferenceImage = ReferenceImage {
    caption: "How to register a customer and create the order from the counter screen",
    url: "https://ajuda.bling.com.br/hc/article_attachments/10791100416023",
};

const LINE_A_POLICY: &[&str] = &[
    "Check the purchase history and keep the price equal to or above the advertised one.",
    "If the customer quotes the Line A price and we stock that brand, go ahead.",
    "Without the brand, offer the advertised price and discount only if needed.",
];

const LINE_B_POLICY: &[&str] = &[
    "Check the website.",
    "Use the current website price.",
    "Use the cheapest brand, or the one the customer asked for.",
];

const COUNTER_ORDER_STEPS: &[&str] = &[
    "Customer tab: name and phone are enough for a plain sale. For an invoice, add the tax ID \
     and full address.",
    "Product tab: always use Advanced Search to find products. Set the PRICE, then click \
     INSERT.",
    "Several products: after each insert a prompt appears. Answer NO to add more products or \
     YES to finish and jump to the payment tab.",
    "Payment tab: pick the payment method and the seller type (Line A or Line B), then click \
     Finish Sale.",
];

const PAYMENT_QUESTIONS: &[&str] = &[
    "Which payment method will be used?",
    "Paid in full or in instalments?",
    "Card, PIX, cash or invoice?",
    "Does any discount apply?",
];

const LINE_CLASSIFICATION_NOTICE: &str = "Classify as Line A only if the customer explicitly \
     names that brand; otherwise the order is Line B.";

pub fn screen_content(screen: Screen) -> ScreenContent {
    match screen {
        Screen::Home => ScreenContent {
            instructions: "Check whether the customer already has a record. If needed, search \
                           the ERP by mobile number.",
            example: Some(PHONE_SEARCH_EXAMPLE),
            policy: &[],
            notice: None,
        },
        Screen::Lookup => ScreenContent {
            instructions: "Look up the customer's data to confirm the record details and \
                           purchase history.",
            example: Some(PURCHASE_HISTORY_EXAMPLE),
            policy: &[],
            notice: None,
        },
        Screen::InsertExistingOrder => ScreenContent {
            instructions: "Insert the products the customer asked for, with quantities, then \
                           pick the customer's line.",
            example: Some(SELLER_FIELD_EXAMPLE),
            policy: &[],
            notice: None,
        },
        Screen::InsertNewOrder => ScreenContent {
            instructions: "Register the new customer and create the order from the counter \
                           screen, inserting the products asked for with their quantities:",
            example: Some(COUNTER_REGISTRATION_EXAMPLE),
            policy: COUNTER_ORDER_STEPS,
            notice: None,
        },
        Screen::PaymentMethodReview => ScreenContent {
            instructions: "Check the customer's preferred payment method and confirm the \
                           order details. Important questions:",
            example: None,
            policy: PAYMENT_QUESTIONS,
            notice: None,
        },
        Screen::LineADetail => ScreenContent {
            instructions: "Line A pricing rules:",
            example: None,
            policy: LINE_A_POLICY,
            notice: None,
        },
        Screen::LineBDetail => ScreenContent {
            instructions: "Line B pricing rules:",
            example: None,
            policy: LINE_B_POLICY,
            notice: None,
        },
        Screen::RegisterNewCustomer => ScreenContent {
            instructions: "Ask whether they saw the price somewhere, or how they found the store.",
            example: None,
            policy: &[],
            notice: Some(LINE_CLASSIFICATION_NOTICE),
        },
    }
}

/// Hint under the "selected line" banner on the payment screen.
pub fn line_hint(line: ProductLine) -> &'static str {
    if line.uses_payment_calculator() {
        "Enter the amount and pick the payment method to see the final price."
    } else {
        "Follow the Line B instructions to set prices and conditions."
    }
}

/// Full text body for a screen: instructions, notice, policy and example.
pub fn render_body(content: &ScreenContent) -> String {
    let mut body = String::from(content.instructions);

    if let Some(notice) = content.notice {
        body.push_str("\n\n! ");
        body.push_str(notice);
    }

    for rule in content.policy {
        body.push_str("\n  • ");
        body.push_str(rule);
    }

    if let Some(example) = content.example {
        body.push_str(&format!("\n\nExample: {}\n  {}", example.caption, example.url));
    }

    body
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn detail_screens_list_their_policy() {
        assert_eq!(screen_content(Screen::LineADetail).policy.len(), 3);
        assert_eq!(screen_content(Screen::LineBDetail).policy.len(), 3);
    }

    #[test]
    fn new_order_screen_walks_the_counter_tabs() {
        let new_order = screen_content(Screen::InsertNewOrder);

        assert_eq!(new_order.policy.len(), 4);
        assert!(new_order.policy[0].starts_with("Customer tab"));
        assert!(new_order.policy[3].starts_with("Payment tab"));
        assert_ne!(
            new_order.instructions,
            screen_content(Screen::InsertExistingOrder).instructions
        );
    }

    #[test]
    fn payment_screen_lists_questions_to_ask() {
        let body = render_body(&screen_content(Screen::PaymentMethodReview));

        assert!(body.contains("Important questions:"));
        assert!(body.contains("\n  • Paid in full or in instalments?"));
        assert_eq!(screen_content(Screen::PaymentMethodReview).policy.len(), 4);
    }

    #[test]
    fn every_screen_has_instructions() {
        for screen in Screen::ALL {
            assert!(!screen_content(screen).instructions.is_empty(), "{screen:?}");
        }
    }

    #[test]
    fn body_includes_example_link() {
        let body = render_body(&screen_content(Screen::Home));

        assert!(body.contains("Example: How to search a customer record"));
        assert!(body.ends_with("https://i.ibb.co/hRR2y3pB/cel.png"));
    }

    #[test]
    fn body_renders_policy_bullets() {
        let body = render_body(&screen_content(Screen::LineBDetail));

        assert_eq!(
            body,
            "Line B pricing rules:\n  • Check the website.\n  • Use the current website price.\n  • Use the cheapest brand, or the one the customer asked for."
        );
    }

    #[test]
    fn register_screen_carries_classification_notice() {
        let body = render_body(&screen_content(Screen::RegisterNewCustomer));

        assert!(body.contains("Line A only if the customer explicitly names that brand"));
    }

    #[test]
    fn line_hint_differs_per_line() {
        assert_ne!(line_hint(ProductLine::LineA), line_hint(ProductLine::LineB));
    }
}
