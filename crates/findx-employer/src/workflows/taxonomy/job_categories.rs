use serde::Serialize;

/// Top-level job category offered in the classification stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobCategory {
    pub name: String,
    pub subcategories: Vec<String>,
}

impl JobCategory {
    pub fn has_subcategory(&self, subcategory: &str) -> bool {
        self.subcategories.iter().any(|entry| entry == subcategory)
    }
}

/// Two-level category list backing the category and subcategory pickers.
#[derive(Debug, Clone, Serialize)]
pub struct JobCategoryCatalog {
    categories: Vec<JobCategory>,
}

impl JobCategoryCatalog {
    pub fn new(categories: Vec<JobCategory>) -> Self {
        Self { categories }
    }

    pub fn standard() -> Self {
        Self::new(
            STANDARD_JOB_CATEGORIES
                .iter()
                .map(|(name, subcategories)| JobCategory {
                    name: name.to_string(),
                    subcategories: subcategories.iter().map(|s| s.to_string()).collect(),
                })
                .collect(),
        )
    }

    pub fn categories(&self) -> &[JobCategory] {
        &self.categories
    }

    pub fn get(&self, name: &str) -> Option<&JobCategory> {
        self.categories.iter().find(|category| category.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Whether `subcategory` belongs to `category`; unknown categories own nothing.
    pub fn is_member(&self, category: &str, subcategory: &str) -> bool {
        self.get(category)
            .map(|entry| entry.has_subcategory(subcategory))
            .unwrap_or(false)
    }
}

impl Default for JobCategoryCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

const STANDARD_JOB_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Accounting",
        &[
            "Accounts Payable",
            "Bookkeeping",
            "Financial Accounting",
            "Management Accounting",
            "Payroll",
            "Taxation",
        ],
    ),
    (
        "Administration & Office Support",
        &[
            "Administrative Assistant",
            "Data Entry",
            "Office Management",
            "PA, EA & Secretarial",
            "Reception",
        ],
    ),
    (
        "Advertising, Arts & Media",
        &[
            "Agency Account Management",
            "Art Direction",
            "Editing & Publishing",
            "Journalism & Writing",
            "Performing Arts",
        ],
    ),
    (
        "Banking & Financial Services",
        &[
            "Account & Relationship Management",
            "Financial Planning",
            "Lending",
            "Retail Banking",
            "Treasury",
        ],
    ),
    (
        "Call Centre & Customer Service",
        &[
            "Collections",
            "Customer Service - Call Centre",
            "Customer Service - Customer Facing",
            "Sales - Inbound",
            "Supervisors & Team Leaders",
        ],
    ),
    (
        "Community Services & Development",
        &[
            "Aged & Disability Support",
            "Child Welfare, Youth & Family Services",
            "Community Development",
            "Housing & Homelessness Services",
        ],
    ),
    (
        "Construction",
        &[
            "Contracts Management",
            "Estimating",
            "Project Management",
            "Site Supervision",
            "Surveying",
        ],
    ),
    (
        "Consulting & Strategy",
        &["Analysts", "Corporate Development", "Management & Change Consulting", "Policy"],
    ),
    (
        "Design & Architecture",
        &[
            "Architectural Drafting",
            "Architecture",
            "Graphic Design",
            "Interior Design",
            "Web & Interaction Design",
        ],
    ),
    (
        "Education & Training",
        &[
            "Childcare & Outside School Hours Care",
            "Teaching - Primary",
            "Teaching - Secondary",
            "Tutoring",
            "Workplace Training & Assessment",
        ],
    ),
    (
        "Engineering",
        &[
            "Civil/Structural Engineering",
            "Electrical/Electronic Engineering",
            "Mechanical Engineering",
            "Project Engineering",
        ],
    ),
    (
        "Farming, Animals & Conservation",
        &[
            "Agronomy & Farm Services",
            "Farm Labour",
            "Horticulture",
            "Veterinary Services & Animal Welfare",
        ],
    ),
    (
        "Government & Defence",
        &[
            "Air Force",
            "Army",
            "Government - Federal",
            "Government - Local",
            "Government - State",
            "Policy, Planning & Regulation",
        ],
    ),
    (
        "Healthcare & Medical",
        &[
            "General Practitioners",
            "Medical Administration",
            "Nursing - General Medical & Surgical",
            "Pharmacy",
            "Psychology, Counselling & Social Work",
        ],
    ),
    (
        "Hospitality & Tourism",
        &[
            "Bar & Beverage Staff",
            "Chefs/Cooks",
            "Front Office & Guest Services",
            "Tour Guides",
            "Waiting Staff",
        ],
    ),
    (
        "Human Resources & Recruitment",
        &[
            "Consulting & Generalist HR",
            "Recruitment - Agency",
            "Recruitment - Internal",
            "Training & Development",
        ],
    ),
    (
        "Information & Communication Technology",
        &[
            "Business/Systems Analysts",
            "Developers/Programmers",
            "Help Desk & IT Support",
            "Networks & Systems Administration",
            "Security",
            "Telecommunications",
        ],
    ),
    (
        "Insurance & Superannuation",
        &["Claims", "Underwriting", "Brokerage", "Superannuation"],
    ),
    (
        "Legal",
        &[
            "Banking & Finance Law",
            "Conveyancing",
            "Family Law",
            "Litigation & Dispute Resolution",
            "Paralegals & Law Clerks",
        ],
    ),
    (
        "Manufacturing, Transport & Logistics",
        &[
            "Machine Operators",
            "Production, Planning & Scheduling",
            "Road Transport",
            "Warehousing, Storage & Distribution",
        ],
    ),
    (
        "Marketing & Communications",
        &[
            "Brand Management",
            "Digital & Search Marketing",
            "Internal Communications",
            "Marketing Communications",
        ],
    ),
    (
        "Mining, Resources & Energy",
        &[
            "Drilling & Blasting",
            "Mining - Operations",
            "Oil & Gas - Operations",
            "Power Generation & Distribution",
        ],
    ),
    (
        "Real Estate & Property",
        &[
            "Commercial Sales, Leasing & Property Management",
            "Residential Leasing & Property Management",
            "Residential Sales",
            "Valuation",
        ],
    ),
    (
        "Retail & Consumer Products",
        &["Buying", "Merchandisers", "Retail Assistants", "Store Management"],
    ),
    (
        "Sales",
        &[
            "Account & Relationship Management",
            "New Business Development",
            "Sales Coordinators",
            "Sales Representatives/Consultants",
        ],
    ),
    (
        "Science & Technology",
        &[
            "Biological & Biomedical Sciences",
            "Chemistry & Physics",
            "Laboratory & Technical Services",
            "Mathematics, Statistics & Information Sciences",
        ],
    ),
    (
        "Sport & Recreation",
        &["Coaching & Instruction", "Fitness & Personal Training", "Management"],
    ),
    (
        "Trades & Services",
        &[
            "Automotive Trades",
            "Building Trades",
            "Cleaning Services",
            "Electricians",
            "Plumbers",
            "Security Services",
        ],
    ),
    ("Other", &["General"]),
];
