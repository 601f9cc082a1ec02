//! About page and the feedback surface.

use crate::models::Page;

use super::{markdown, subheader};


pub const NAME: &str = "About This Guide";

pub const FEEDBACK_PROMPT: &str = "Share your thoughts or suggestions for improving this guide:";

pub const FEEDBACK_ACK: &str = "Thank you for your feedback! We'll use it to improve the guide.";


/// Acknowledge submitted feedback. Nothing is validated, kept or sent.
pub fn submit_feedback(_feedback: &str) -> &'static str {
    FEEDBACK_ACK
}


pub fn show() -> Page {
    let mut page = Page::new(NAME);

    page.push(markdown(
        "
        This guide was created to help aspiring entrepreneurs in South Africa understand:

        - The types of businesses they can start
        - How to leverage Replit AI for business development
        - Educational resources and skills development opportunities
        - Step-by-step process for business formation

        The information provided is based on current South African business regulations and tech industry practices.

        ### Disclaimer
        This guide is for informational purposes only and should not be considered legal or financial advice.
        Always consult with qualified professionals before making business decisions.
        ",
    ));

    page.push(subheader("We'd love your feedback!"));
    page.push(markdown(&format!(
        "{FEEDBACK_PROMPT}\n\nSubmit with `sabg feedback \"your message\"`."
    )));

    page
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feedback_is_acknowledged_for_any_input() {
        assert_eq!(submit_feedback("Great guide"), FEEDBACK_ACK);
        assert_eq!(submit_feedback(""), FEEDBACK_ACK);
    }
}
