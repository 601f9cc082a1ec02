//! Business opportunities by sector, with the market opportunity chart.

use crate::models::{build_scatter, column, Block, ChartResult, ChartSpec, DataTable, Page, TableError};

use super::{chart_block, info, markdown, subheader, success};


pub const NAME: &str = "Business Opportunities in South Africa";


/// Market figures per business category.
pub fn market_table() -> Result<DataTable, TableError> {
    DataTable::from_columns(vec![
        column(
            "Business Category",
            ["Tech & Software", "E-commerce", "Educational Services", "Fintech", "Consulting"],
        ),
        column("Market Size (Billions ZAR)", [15.2, 28.6, 9.7, 22.4, 18.9]),
        column("Annual Growth (%)", [12, 18, 14, 16, 9]),
        column("Startup Cost (1-10)", [4, 5, 6, 7, 3]),
        column("Tech Complexity (1-10)", [8, 6, 5, 9, 4]),
    ])
}


/// Startup cost against growth, sized by market and coloured by category.
pub fn opportunity_chart(table: &DataTable) -> ChartResult<ChartSpec> {
    Ok(build_scatter(
        table,
        "Startup Cost (1-10)",
        "Annual Growth (%)",
        Some("Market Size (Billions ZAR)"),
        Some("Business Category"),
        Some("Business Opportunity Analysis by Category"),
        Some("Business Category"),
    )?
    .with_size_max(60.0)
    .with_label("Startup Cost (1-10)", "Initial Investment Required (Lower is Better)")
    .with_label("Annual Growth (%)", "Annual Market Growth (%)"))
}


pub fn show() -> Page {
    let mut page = Page::new(NAME);

    page.push(markdown(
        "
        South Africa offers diverse business opportunities across multiple sectors.
        Here are some business types that are well-suited for entrepreneurs looking to leverage Replit AI:
        ",
    ));

    page.push(Block::Tabs(vec![
        tab(
            "Tech & Software",
            "Tech & Software Businesses",
            "
            ### 1. Web Development Agency
            Build websites for local businesses using Replit AI to quickly prototype and demonstrate solutions.

            ### 2. Mobile App Development
            Develop mobile applications for specific South African market needs using Replit AI for backend services.

            ### 3. Custom Software Solutions
            Create bespoke software for industries like mining, agriculture, or healthcare that are prominent in South Africa.

            ### 4. AI Chatbot Development
            Build specialized chatbots for customer service, educational content, or healthcare guidance using Replit AI's capabilities.
            ",
            "The software development market in South Africa is growing at approximately 12% annually, creating significant opportunities for new entrants.",
        ),
        tab(
            "E-commerce",
            "E-commerce Businesses",
            "
            ### 1. Online Marketplace
            Create niche marketplaces connecting South African producers with consumers, using Replit AI for backend and recommendation systems.

            ### 2. Dropshipping Business
            Build a dropshipping site focused on South African or African products using Replit to manage your storefront.

            ### 3. Subscription Box Service
            Develop subscription services for local products with a tech-enabled management system built on Replit.

            ### 4. Digital Product Store
            Sell digital products like templates, courses, or e-books with a custom platform built using Replit AI.
            ",
            "E-commerce in South Africa grew by over 66% during the pandemic and continues to expand as more consumers shop online.",
        ),
        tab(
            "Educational",
            "Educational Businesses",
            "
            ### 1. Coding Academy
            Launch a coding academy that teaches South African students using Replit as the learning platform.

            ### 2. Online Tutoring Platform
            Create a platform connecting tutors with students, possibly focusing on areas with educational gaps in South Africa.

            ### 3. Corporate Training Services
            Offer specialized digital skills training to businesses looking to upskill their workforce.

            ### 4. Educational Content Creation
            Develop interactive educational content tailored to the South African curriculum using Replit AI.
            ",
            "There's a significant skills gap in South Africa, particularly in technology fields, creating demand for accessible education services.",
        ),
        tab(
            "Financial Services",
            "Financial Services",
            "
            ### 1. Fintech Solutions
            Develop specialized financial services applications addressing unique South African market needs.

            ### 2. Financial Literacy Platform
            Create interactive financial education tools tailored to South African economic realities.

            ### 3. SME Funding Platform
            Build platforms connecting small businesses with investors or alternative funding sources.

            ### 4. Automated Accounting Solutions
            Develop simplified accounting systems for small businesses with South African tax compliance built-in.
            ",
            "South Africa has a growing fintech sector with opportunities to serve both banked and underbanked populations.",
        ),
        tab(
            "Consulting",
            "Consulting Services",
            "
            ### 1. Digital Transformation Consulting
            Help traditional businesses digitize their operations using Replit AI to demonstrate proof-of-concepts.

            ### 2. AI Implementation Consulting
            Assist businesses in implementing AI solutions for efficiency and growth using Replit AI as a development platform.

            ### 3. Tech-Enabled Marketing Services
            Offer data-driven marketing services with custom analytics tools built on Replit.

            ### 4. Business Process Automation
            Help businesses automate repetitive tasks with custom solutions built using Replit AI.
            ",
            "As South African businesses seek to digitize operations, there's growing demand for consultants who can bridge technical and business requirements.",
        ),
    ]));

    page.push(subheader("Market Opportunity Analysis"));
    page.push(chart_block(market_table(), opportunity_chart));

    page.push(markdown(
        "
        ## Key Factors for Business Success in South Africa

        When choosing a business type, consider these important factors:

        1. **Market Need**: Identify genuine problems faced by South African consumers or businesses
        2. **Regulatory Requirements**: Understand the specific regulations for your industry
        3. **Infrastructure Considerations**: Plan for infrastructure challenges like internet connectivity or power supply
        4. **Local Competition**: Research existing solutions and identify your unique value proposition
        5. **Scalability**: Consider how Replit AI can help you scale operations without proportional cost increases
        ",
    ));

    page.push(success(
        "💡 **Pro Tip**: Start with a Minimum Viable Product (MVP) to test your business concept before significant investment. Replit AI is perfect for rapid prototyping and MVP development.",
    ));

    page
}


fn tab(label: &str, heading: &str, body: &str, note: &str) -> (String, Vec<Block>) {
    (
        label.to_string(),
        vec![subheader(heading), markdown(body), info(note)],
    )
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Geometry;

    #[test]
    fn test_market_table_shape() {
        let table = market_table().unwrap();
        assert_eq!(table.len(), 5);
        assert_eq!(table.column_names().count(), 5);
    }

    #[test]
    fn test_opportunity_chart_encodings() {
        let table = market_table().unwrap();
        let spec = opportunity_chart(&table).unwrap();

        assert_eq!(spec.geometry, Geometry::Scatter);
        assert_eq!(spec.size_field.as_deref(), Some("Market Size (Billions ZAR)"));
        assert_eq!(spec.color_field.as_deref(), Some("Business Category"));
        assert_eq!(spec.hover_field, "Business Category");
        assert_eq!(spec.size_max, Some(60.0));
        assert_eq!(spec.label_for("Annual Growth (%)"), "Annual Market Growth (%)");
    }

    #[test]
    fn test_page_has_five_tabs_and_one_chart() {
        let page = show();
        let tabs = page.blocks.iter().find_map(|b| match b {
            Block::Tabs(tabs) => Some(tabs.len()),
            _ => None,
        });
        assert_eq!(tabs, Some(5));
        assert_eq!(page.charts().len(), 1);
    }
}
