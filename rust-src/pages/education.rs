//! Learning pathways, institutions and communities.

use crate::models::{column, Block, DataTable, Page, ResourceCard, TableError};

use super::{expander, info, markdown, subheader, success, table_block};


pub const NAME: &str = "Education & Skills Development";


const PATHWAYS: [(&str, &str); 3] = [
    (
        "Beginner Path (3-6 months)",
        "
        For those new to both technology and entrepreneurship:

        1. **Programming Basics** (1-2 months)
           - Complete a basic programming course focusing on Python or JavaScript
           - Learn to use Replit AI for code generation and explanation

        2. **Web Development Fundamentals** (1-2 months)
           - Learn HTML, CSS basics
           - Understand how websites function

        3. **South African Business Basics** (1 month)
           - Learn about business registration requirements
           - Understand basic tax obligations
           - Explore funding options for small businesses

        4. **First Project** (1 month)
           - Build a simple website or application using Replit AI
           - Focus on solving a specific problem for a potential customer
        ",
    ),
    (
        "Intermediate Path (6-12 months)",
        "
        For those with some technical or business background:

        1. **Advanced Programming Skills** (2-3 months)
           - Learn about APIs and integrations
           - Database fundamentals
           - More complex front-end development

        2. **South African Business Development** (2-3 months)
           - Digital marketing for the South African market
           - Local competition analysis
           - Understanding regulatory compliance in specific sectors

        3. **Product Development** (2-3 months)
           - User experience design
           - Product management basics
           - Customer feedback implementation

        4. **Growth Project** (1-3 months)
           - Build a fully-functional business solution with Replit AI
           - Implement South African payment integrations
           - Create a go-to-market strategy
        ",
    ),
    (
        "Advanced Path (12+ months)",
        "
        For scaling existing businesses or complex technical solutions:

        1. **Specialized Technical Skills** (3-6 months)
           - AI/ML implementation
           - Advanced security considerations
           - Performance optimization
           - Complex integrations with South African services

        2. **Business Scaling** (3-6 months)
           - Investment strategies in the South African context
           - Team building and management
           - Compliance with additional regulations as you grow
           - Partnership development

        3. **Industry Specialization** (6+ months)
           - Deep dive into industry-specific requirements
           - Networking with industry partners
           - Developing specialized solutions for your sector
        ",
    ),
];


/// (name, description, url)
const COMMUNITIES: [(&str, &str, &str); 5] = [
    (
        "Silicon Cape",
        "A community of tech entrepreneurs, developers, and investors focused on growing the Western Cape tech ecosystem.",
        "https://www.siliconcape.com",
    ),
    (
        "Heavy Chef",
        "A learning platform for entrepreneurs with regular events and resources.",
        "https://heavychef.com",
    ),
    (
        "Startup Grind South Africa",
        "Local chapter of global startup community with events across major South African cities.",
        "https://www.startupgrind.com/south-africa",
    ),
    (
        "ZATech",
        "South African tech Slack community with channels for developers, entrepreneurs, and job opportunities.",
        "https://zatech.co.za",
    ),
    (
        "Python South Africa (PyConZA)",
        "Community for Python developers with annual conferences and regular meetups.",
        "https://za.pycon.org",
    ),
];


pub fn universities() -> Result<DataTable, TableError> {
    DataTable::from_columns(vec![
        column(
            "Institution",
            [
                "University of Cape Town",
                "University of the Witwatersrand",
                "Stellenbosch University",
                "University of Johannesburg",
                "University of Pretoria",
            ],
        ),
        column(
            "Relevant Programs",
            [
                "Information Systems, Computer Science, Business Science",
                "Digital Business, Computer Science, Entrepreneurship",
                "Business Management, Computer Science, Information Systems",
                "Business IT, Entrepreneurship, Tech Innovation",
                "Informatics, Business Management, Entrepreneurship",
            ],
        ),
        column(
            "Website",
            [
                "https://www.uct.ac.za",
                "https://www.wits.ac.za",
                "https://www.sun.ac.za",
                "https://www.uj.ac.za",
                "https://www.up.ac.za",
            ],
        ),
    ])
}


pub fn bootcamps() -> Result<DataTable, TableError> {
    DataTable::from_columns(vec![
        column(
            "Provider",
            ["CodeSpace Academy", "HyperionDev", "ALX Africa", "Digital Academy", "Umuzi"],
        ),
        column(
            "Focus Areas",
            [
                "Web Development, Software Engineering",
                "Software Engineering, Data Science, Web Development",
                "Software Engineering, Entrepreneurship",
                "Web Development, UX Design, Digital Marketing",
                "Web Development, Data Science, Digital Marketing",
            ],
        ),
        column(
            "Duration",
            ["3-6 months", "3-6 months", "6-12 months", "3 months", "12 months"],
        ),
        column(
            "Website",
            [
                "https://www.codespace.co.za",
                "https://www.hyperiondev.com",
                "https://www.alxafrica.com",
                "https://www.digitalacademy.co.za",
                "https://www.umuzi.org",
            ],
        ),
    ])
}


pub fn government_programs() -> Result<DataTable, TableError> {
    DataTable::from_columns(vec![
        column(
            "Program",
            [
                "Small Enterprise Development Agency (SEDA)",
                "Technology Innovation Agency (TIA)",
                "National Youth Development Agency (NYDA)",
                "Industrial Development Corporation (IDC)",
                "Companies and Intellectual Property Commission (CIPC)",
            ],
        ),
        column(
            "Support Offered",
            [
                "Business planning, Mentorship, Training workshops",
                "Innovation funding, Technical support, Commercialization",
                "Youth entrepreneurship, Skills development, Funding",
                "Business funding, Industry knowledge, Market access",
                "Business registration, IP registration, Compliance guidance",
            ],
        ),
        column(
            "Website",
            [
                "https://www.seda.org.za",
                "https://www.tia.org.za",
                "https://www.nyda.gov.za",
                "https://www.idc.co.za",
                "https://www.cipc.co.za",
            ],
        ),
    ])
}


pub fn online_platforms() -> Result<DataTable, TableError> {
    DataTable::from_columns(vec![
        column(
            "Platform",
            [
                "GetSmarter (in partnership with South African universities)",
                "Coursera",
                "Udemy",
                "FreeCodeCamp",
                "Replit's Learning Resources",
            ],
        ),
        column(
            "Relevant Courses",
            [
                "Digital Marketing, Business Management, Data Analysis",
                "Programming, Web Development, Business courses",
                "Practical coding, Entrepreneurship, Marketing",
                "Web Development, JavaScript, Python (free)",
                "Coding tutorials focused on Replit platform (free)",
            ],
        ),
        column(
            "South African Context",
            [
                "Some courses specifically address South African business context",
                "Global content, but applicable skills",
                "Some South African instructors offer localized content",
                "Global content, supportive community",
                "Directly relevant to using Replit AI",
            ],
        ),
        column(
            "Website",
            [
                "https://www.getsmarter.com",
                "https://www.coursera.org",
                "https://www.udemy.com",
                "https://www.freecodecamp.org",
                "https://replit.com/learn",
            ],
        ),
    ])
}


pub fn show() -> Page {
    let mut page = Page::new(NAME);

    page.push(markdown(
        "
        Building successful businesses with Replit AI requires both technical knowledge and business acumen.
        This section outlines educational pathways and resources tailored for South African entrepreneurs.
        ",
    ));

    page.push(subheader("Key Skill Areas for Tech Entrepreneurs"));
    page.push(Block::Columns(vec![
        vec![markdown(
            "
            ### Technical Skills
            - **Programming Fundamentals**: Basic understanding of coding concepts
            - **Web Development**: HTML, CSS, JavaScript basics
            - **Data Analysis**: Basic data interpretation skills
            - **AI Literacy**: Understanding how to work with AI tools
            - **Problem Solving**: Logical approach to technical challenges
            ",
        )],
        vec![markdown(
            "
            ### Business Skills
            - **South African Business Regulations**: Understanding local requirements
            - **Market Research**: Identifying viable opportunities
            - **Financial Management**: Budgeting and financial planning
            - **Marketing**: Digital marketing skills
            - **Customer Development**: Understanding user needs
            ",
        )],
    ]));

    page.push(subheader("Learning Pathways"));
    for (title, body) in PATHWAYS {
        page.push(expander(title, body));
    }

    page.push(subheader("South African Educational Resources"));
    page.push(Block::Tabs(vec![
        (
            "Formal Education".to_string(),
            vec![
                markdown("### Universities and Colleges"),
                table_block(universities()),
                markdown(
                    "
                    **Note**: Most South African universities now offer specialized courses in technology entrepreneurship,
                    digital business, and innovation. Some provide part-time and distance learning options suitable for working professionals.
                    ",
                ),
            ],
        ),
        (
            "Bootcamps & Short Courses".to_string(),
            vec![
                markdown("### Bootcamps & Short Courses"),
                table_block(bootcamps()),
                markdown(
                    "
                    **Benefits**: These intensive programs often provide practical skills that can be immediately applied to your business.
                    Many offer mentorship and networking opportunities with industry professionals.
                    ",
                ),
            ],
        ),
        (
            "Government Programs".to_string(),
            vec![
                markdown("### Government and Support Programs"),
                table_block(government_programs()),
                markdown(
                    "
                    **Access**: Many government programs offer free or subsidized training specifically for entrepreneurs.
                    Some have special focus areas for technology businesses or youth-owned enterprises.
                    ",
                ),
            ],
        ),
        (
            "Online Learning".to_string(),
            vec![
                markdown("### Online Learning Platforms"),
                table_block(online_platforms()),
                markdown(
                    "
                    **Flexibility**: Online learning allows you to develop skills at your own pace while building your business.
                    Look for courses with practical projects that you can apply directly to your business needs.
                    ",
                ),
            ],
        ),
    ]));

    page.push(subheader("South African Tech & Business Communities"));
    for (name, description, url) in COMMUNITIES {
        page.push(Block::Card(
            ResourceCard::new(name, description, Some(url)).with_icon("🤝"),
        ));
    }

    page.push(info(
        "
        💡 **Networking Tip**: Joining tech communities is particularly valuable for entrepreneurs using Replit AI,
        as you can connect with both technical talent and potential business partners or clients.
        ",
    ));

    page.push(subheader("Creating Your Skills Development Plan"));
    page.push(markdown(
        "
        To effectively build a business using Replit AI, create a personalized skills development plan:

        1. **Assess your current skills**:
           - Technical capabilities
           - Business knowledge
           - South African market understanding

        2. **Identify your skills gaps**:
           - What technical knowledge do you need to effectively use Replit AI?
           - What business skills do you need to succeed in your chosen sector?
           - What South African regulatory knowledge is required?

        3. **Prioritize learning needs**:
           - Focus first on skills that directly impact your ability to launch
           - Balance technical and business learning

        4. **Select appropriate resources**:
           - Choose learning options that fit your schedule and learning style
           - Look for South African-specific content when possible

        5. **Create a learning schedule**:
           - Set aside dedicated time for skills development
           - Balance learning with actual business building

        6. **Apply skills immediately**:
           - Use Replit AI to implement what you learn
           - Test concepts on real business challenges

        7. **Track progress and adjust**:
           - Document what you've learned
           - Identify new skill needs as your business evolves
        ",
    ));

    page.push(success(
        "
        **Remember**: The goal isn't to become an expert in everything, but to develop enough knowledge to effectively
        leverage Replit AI for your business needs. For specialized requirements, consider partnering with experts or using
        freelance services to complement your skills.
        ",
    ));

    page
}
