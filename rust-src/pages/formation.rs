//! Legal structures, registration steps, timelines and costs.

use crate::models::{
    build_bar, clamp_fraction, column, Block, ChartResult, ChartSpec, DataTable, Orientation, Page,
    TableError,
};

use super::{chart_block, expander, info, markdown, subheader, success, table_block};


pub const NAME: &str = "Business Formation Process";


/// A legal business structure option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessStructure {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub pros: &'static str,
    pub cons: &'static str,
    pub registration: &'static str,
    pub suitable_for: &'static str,
}


pub static STRUCTURES: [BusinessStructure; 5] = [
    BusinessStructure {
        key: "sole-proprietorship",
        name: "Sole Proprietorship",
        description: "An unincorporated business owned by one individual",
        pros: "Simple to establish, minimal paperwork, full control, lower compliance costs",
        cons: "Unlimited personal liability, limited access to funding, potential difficulty scaling",
        registration: "No formal registration required, but must register with SARS for tax purposes",
        suitable_for: "Freelancers, consultants, small online businesses with limited liability concerns",
    },
    BusinessStructure {
        key: "pty-ltd",
        name: "Private Company (Pty Ltd)",
        description: "A separate legal entity owned by shareholders",
        pros: "Limited liability, easier access to funding, professional image, perpetual existence",
        cons: "More expensive to set up, higher compliance requirements, more complex administration",
        registration: "Register with CIPC, obtain company registration number, register for tax",
        suitable_for: "Technology startups, e-commerce businesses, businesses seeking investment",
    },
    BusinessStructure {
        key: "inc",
        name: "Personal Liability Company (Inc)",
        description: "Company where directors are jointly liable for company debts",
        pros: "Professional credibility, perpetual existence, suitable for professional services",
        cons: "Directors have personal liability, compliance requirements",
        registration: "Register with CIPC, followed by tax registration",
        suitable_for: "Professional service providers like law firms, accounting practices",
    },
    BusinessStructure {
        key: "trust",
        name: "Business Trust",
        description: "Legal entity created by a trust deed",
        pros: "Protection of assets, tax benefits, privacy",
        cons: "Complex to establish, expensive setup, regulatory scrutiny",
        registration: "Create trust deed, register with Master of High Court, register for tax",
        suitable_for: "Asset holding, estate planning, complex businesses with significant assets",
    },
    BusinessStructure {
        key: "cooperative",
        name: "Cooperative",
        description: "An autonomous association of persons united voluntarily to meet common economic and social needs",
        pros: "Democratic member control, limited liability, possible tax advantages",
        cons: "Complex decision-making process, potential conflicts between members",
        registration: "Register with CIPC as a cooperative, register for tax",
        suitable_for: "Community-based businesses, agricultural ventures, collaborative tech initiatives",
    },
];


/// Find a structure by key or case-insensitive name.
pub fn find_structure(label: &str) -> Option<&'static BusinessStructure> {
    let label = label.trim();
    STRUCTURES
        .iter()
        .find(|s| s.key.eq_ignore_ascii_case(label) || s.name.eq_ignore_ascii_case(label))
}


pub const STEPS: [(&str, &str); 8] = [
    (
        "1. Choose a Business Name",
        "
        - Search for availability on the CIPC website
        - Ensure the name complies with regulations
        - Reserve the name before registration

        **How Replit AI can help**: Create a script to check name availability through CIPC APIs or web scraping.
        ",
    ),
    (
        "2. Prepare Required Documents",
        "
        - Memorandum of Incorporation (for companies)
        - Certified copies of ID documents for all directors/members
        - Proof of address for the business
        - Registration forms (available on CIPC website)

        **How Replit AI can help**: Generate templates for required business documents.
        ",
    ),
    (
        "3. Register with CIPC",
        "
        - Submit registration application to CIPC
        - Pay registration fees
        - Receive company registration certificate

        **How Replit AI can help**: Create a tracking system for your registration process.
        ",
    ),
    (
        "4. Register for Tax with SARS",
        "
        - Apply for income tax registration
        - Register for VAT (if applicable)
        - Register as an employer (if applicable)
        - Register for UIF (Unemployment Insurance Fund)

        **How Replit AI can help**: Build a tax calendar app with reminders for filing dates.
        ",
    ),
    (
        "5. Open a Business Bank Account",
        "
        - Compare business banking options
        - Prepare required documentation
        - Visit bank or complete online application

        **How Replit AI can help**: Create a comparison tool for different bank offerings.
        ",
    ),
    (
        "6. Register with Department of Labor",
        "
        - Register for UIF and COIDA (Compensation for Occupational Injuries and Diseases Act)
        - Understand employment regulations

        **How Replit AI can help**: Generate employee documentation templates compliant with South African labor law.
        ",
    ),
    (
        "7. Additional Industry-Specific Registrations",
        "
        - Research licenses or permits required for your specific industry
        - Apply for relevant permits

        **How Replit AI can help**: Build a database of industry-specific requirements based on your business type.
        ",
    ),
    (
        "8. Create a Business Website and Online Presence",
        "
        - Register a domain name (preferably .co.za)
        - Develop a business website
        - Set up social media profiles

        **How Replit AI can help**: Generate a complete business website with your company details.
        ",
    ),
];


const REPLIT_APPLICATIONS: [(&str, &str); 5] = [
    (
        "CIPC Registration Tracker",
        "
        Build a simple application to track your registration progress with CIPC,
        including document checklists, submission dates, and status updates.
        ",
    ),
    (
        "Business Plan Generator",
        "
        Create a tool that helps you draft a comprehensive business plan based on South African business standards,
        including sections specifically focused on local market conditions.
        ",
    ),
    (
        "South African Tax Calendar",
        "
        Develop a tax reminder system that alerts you about upcoming filing deadlines
        for provisional tax, VAT, PAYE, and other tax obligations specific to South Africa.
        ",
    ),
    (
        "Business Website with Legal Compliance",
        "
        Generate a business website that includes all legally required elements like privacy policy,
        terms of service, and POPIA compliance statements tailored to South African law.
        ",
    ),
    (
        "B-BBEE Calculator and Planner",
        "
        Build a tool to calculate your B-BBEE (Broad-Based Black Economic Empowerment) score
        and identify actions to improve your rating, which can help with government contracts.
        ",
    ),
];


pub const TIMELINE_PALETTE: [&str; 2] = ["#2C6EBF", "#4CA3DD"];


pub fn timeline_table() -> Result<DataTable, TableError> {
    DataTable::from_columns(vec![
        column(
            "Stage",
            [
                "Name Reservation",
                "Company Registration",
                "Tax Registration",
                "Bank Account Setup",
                "Labor Registration",
                "Website Development",
            ],
        ),
        column("Minimum Days", [2, 7, 10, 5, 5, 1]),
        column("Maximum Days", [10, 21, 30, 15, 14, 7]),
    ])
}


/// Horizontal grouped bars of minimum and maximum days per stage.
pub fn timeline_chart(table: &DataTable) -> ChartResult<ChartSpec> {
    Ok(build_bar(
        table,
        "Stage",
        &["Minimum Days", "Maximum Days"],
        Orientation::Horizontal,
        Some("Estimated Business Formation Timeline (in Working Days)"),
    )?
    .with_label("value", "Days Required")
    .with_label("variable", "Duration")
    .with_palette(&TIMELINE_PALETTE))
}


pub fn cost_table() -> Result<DataTable, TableError> {
    DataTable::from_columns(vec![
        column(
            "Item",
            [
                "Name Reservation",
                "Company Registration",
                "Business Bank Account",
                "Domain Registration (.co.za)",
                "Basic Website Development",
                "Accounting Services Setup",
                "Business Logo Design",
            ],
        ),
        column("Estimated Cost (ZAR)", [50, 175, 0, 150, 0, 1500, 500]),
        column(
            "Notes",
            [
                "Fee paid to CIPC",
                "Fee paid to CIPC for private company",
                "Many banks offer free business accounts for new businesses",
                "Annual cost through local domain providers",
                "Using Replit AI to create your website",
                "Basic accounting setup (varies widely)",
                "Using design services or AI tools",
            ],
        ),
    ])
}


/// Relative tech-ecosystem activity of the major business hubs.
pub fn hubs_table() -> Result<DataTable, TableError> {
    DataTable::from_columns(vec![
        column("Hub", ["Gauteng", "WC", "KZN", "EC", "FS"]),
        column("Relative Activity", [30, 25, 25, 20, 15]),
    ])
}


pub fn hubs_chart(table: &DataTable) -> ChartResult<ChartSpec> {
    Ok(build_bar(
        table,
        "Hub",
        &["Relative Activity"],
        Orientation::Vertical,
        Some("South African Business Hubs"),
    )?
    .with_palette(&["#e74c3c", "#3498db", "#2ecc71", "#f39c12", "#9b59b6"]))
}


/// Render with the first structure selected and no progress bar.
pub fn show() -> Page {
    render(&STRUCTURES[0], None)
}


/// Render with a chosen structure and, optionally, the number of
/// registration steps already completed.
pub fn render(structure: &BusinessStructure, completed_steps: Option<usize>) -> Page {
    let mut page = Page::new(NAME);

    page.push(markdown(
        "
        Starting a business in South Africa involves several legal and regulatory steps.
        This guide outlines the process, with special focus on how Replit AI can help streamline your business formation.
        ",
    ));

    page.push(subheader("Legal Business Structures in South Africa"));
    let choices = STRUCTURES
        .iter()
        .map(|s| if s.key == structure.key { format!("**[{}]**", s.name) } else { s.name.to_string() })
        .collect::<Vec<_>>()
        .join(" | ");
    page.push(Block::Caption(format!("Select a business structure to learn more: {choices}")));

    page.push(Block::Columns(vec![
        vec![Block::Markdown(format!(
            "### {}\n**Description**: {}\n**Suitable for**: {}\n**Registration process**: {}",
            structure.name, structure.description, structure.suitable_for, structure.registration
        ))],
        vec![Block::Markdown(format!(
            "#### Pros\n{}\n#### Cons\n{}",
            structure.pros, structure.cons
        ))],
    ]));

    page.push(subheader("Step-by-Step Business Registration Process"));
    if let Some(done) = completed_steps {
        let total = STEPS.len();
        page.push(Block::Progress {
            fraction: clamp_fraction(done as f64 / total as f64),
            label: format!("{} of {} registration steps completed", done.min(total), total),
        });
    }
    for (title, body) in STEPS {
        page.push(expander(title, body));
    }

    page.push(subheader("Estimated Timeline for Business Formation"));
    page.push(chart_block(timeline_table(), timeline_chart));
    page.push(Block::Caption(
        "Note: Actual timelines may vary based on current processing times and the completeness of your application."
            .to_string(),
    ));

    page.push(subheader("Estimated Costs for Business Formation"));
    page.push(table_block(cost_table()));
    page.push(info(
        "
        💡 **Cost-Saving Tip**: By using Replit AI to create your business website, business management tools,
        and even to help draft certain documents, you can significantly reduce startup costs compared to hiring developers.
        ",
    ));

    page.push(subheader("How Replit AI Can Support Your Business Formation"));
    for (i, (title, body)) in REPLIT_APPLICATIONS.iter().enumerate() {
        page.push(expander(&format!("{}. {}", i + 1, title), body));
    }

    page.push(subheader("Additional Resources for Business Formation"));
    page.push(markdown(
        "
        ### Official Government Resources

        - [Companies and Intellectual Property Commission (CIPC)](https://www.cipc.co.za)
        - [South African Revenue Service (SARS)](https://www.sars.gov.za)
        - [Department of Labor](https://www.labour.gov.za)
        - [Small Enterprise Development Agency (SEDA)](https://www.seda.org.za)

        ### Business Support Organizations

        - [Business Partners](https://www.businesspartners.co.za)
        - [National Small Business Chamber](https://www.nsbc.org.za)
        - [Black Business Council](https://www.blackbusinesscouncil.org)
        - [South African Chamber of Commerce and Industry](https://www.sacci.org.za)

        ### Legal Resources

        - [Legal Aid South Africa](https://legal-aid.co.za)
        - [ProBono.Org](https://www.probono.org.za)
        - [Law Society of South Africa](https://www.lssa.org.za)
        ",
    ));

    page.push(subheader("South African Business Ecosystem"));
    page.push(chart_block(hubs_table(), hubs_chart));
    page.push(Block::Caption(
        "Major business hubs in South Africa showing relative tech ecosystem activity".to_string(),
    ));
    page.push(markdown(
        "
        ### Key Regional Business Development Agencies:

        - **Gauteng**: [Gauteng Growth and Development Agency](https://www.ggda.co.za/)
        - **Western Cape**: [Wesgro](https://www.wesgro.co.za/)
        - **KwaZulu-Natal**: [Trade & Investment KZN](https://www.tikzn.co.za/)
        - **Eastern Cape**: [Eastern Cape Development Corporation](https://www.ecdc.co.za/)
        ",
    ));

    page.push(success(
        "
        **Final Tip**: While using Replit AI can dramatically reduce the technical barriers to starting a business,
        it's always advisable to consult with a legal professional or business advisor who specializes in South African
        business law to ensure full compliance with all regulations.
        ",
    ));

    page
}
