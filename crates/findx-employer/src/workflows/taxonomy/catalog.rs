use super::domain::{Question, TaxonomyCategory};

const YES_NO: [&str; 2] = ["Yes", "No"];

fn ask(text: &str) -> Question {
    Question::free_form(text)
}

fn choose(text: &str, options: &[&str]) -> Question {
    Question::with_options(text, options.iter().copied())
}

fn category(
    key: &str,
    title: &str,
    members: &[&str],
    questions: Vec<Question>,
) -> TaxonomyCategory {
    TaxonomyCategory {
        key: key.to_string(),
        title: title.to_string(),
        member_categories: members.iter().map(|member| member.to_string()).collect(),
        questions,
    }
}

/// Questions offered for every posting regardless of its category.
pub(crate) fn basic_questions() -> Vec<Question> {
    vec![
        choose(
            "How many years of relevant experience do you have?",
            &[
                "Less than 1 year",
                "1-2 years",
                "3-5 years",
                "6-10 years",
                "More than 10 years",
            ],
        ),
        choose(
            "Do you have the right to work in this country?",
            &[
                "Yes, I am a citizen or permanent resident",
                "Yes, I hold a valid work visa",
                "No, I require sponsorship",
            ],
        ),
        choose(
            "When are you available to start?",
            &[
                "Immediately",
                "Within 2 weeks",
                "Within 1 month",
                "More than 1 month",
            ],
        ),
        choose("Do you hold a current driver's licence?", &YES_NO),
        ask("What are your salary expectations?"),
        ask("Why are you interested in this role?"),
    ]
}

pub(crate) fn standard_categories() -> Vec<TaxonomyCategory> {
    let mut categories = business_categories();
    categories.extend(technology_categories());
    categories.extend(professional_categories());
    categories.extend(creative_categories());
    categories.extend(industry_categories());
    categories.extend(health_categories());
    categories
}

fn business_categories() -> Vec<TaxonomyCategory> {
    vec![
        category(
            "accounting",
            "Accounting",
            &["Accountant", "Bookkeeper", "Payroll Officer", "Tax Accountant"],
            vec![
                choose(
                    "Which accounting qualifications do you hold?",
                    &["CPA", "CA", "ACCA", "Bachelor of Accounting", "None"],
                ),
                choose(
                    "Which accounting software have you used?",
                    &["Xero", "MYOB", "QuickBooks", "SAP", "NetSuite"],
                ),
                choose(
                    "Have you prepared end of financial year reports?",
                    &YES_NO,
                ),
                ask("Describe your experience with month-end reconciliations."),
            ],
        ),
        category(
            "administration",
            "Administration",
            &["Office Manager", "Receptionist", "Data Entry", "Executive Assistant"],
            vec![
                choose(
                    "Which office suites are you proficient in?",
                    &["Microsoft 365", "Google Workspace", "LibreOffice"],
                ),
                choose(
                    "What is your typing speed?",
                    &["Under 40 wpm", "40-60 wpm", "60-80 wpm", "Over 80 wpm"],
                ),
                choose("Have you managed executive calendars?", &YES_NO),
            ],
        ),
        category(
            "advertising",
            "Advertising",
            &["Account Manager", "Media Buyer", "Copywriter", "Campaign Manager"],
            vec![
                choose(
                    "Which advertising channels have you managed?",
                    &["Search", "Social", "Display", "Television", "Radio", "Outdoor"],
                ),
                choose(
                    "What monthly media budget have you managed?",
                    &["Under $10k", "$10k-$50k", "$50k-$250k", "Over $250k"],
                ),
                ask("Share a campaign you are proud of and its results."),
            ],
        ),
        category(
            "banking",
            "Banking & Finance",
            &["Financial Analyst", "Loan Officer", "Teller", "Investment Advisor"],
            vec![
                choose(
                    "Which financial licences or accreditations do you hold?",
                    &["RG146", "CFA", "CFP", "Credit licence", "None"],
                ),
                choose("Have you worked under regulatory compliance frameworks?", &YES_NO),
                choose(
                    "Which areas of finance have you worked in?",
                    &[
                        "Retail banking",
                        "Commercial lending",
                        "Wealth management",
                        "Investment banking",
                        "Corporate finance",
                    ],
                ),
            ],
        ),
        category(
            "call_centre",
            "Call Centre",
            &["Customer Service Representative", "Team Leader", "Contact Centre Agent"],
            vec![
                choose(
                    "Which contact channels have you handled?",
                    &["Inbound calls", "Outbound calls", "Live chat", "Email"],
                ),
                choose("Are you comfortable working rotating shifts?", &YES_NO),
                choose(
                    "How many calls per day have you handled on average?",
                    &["Under 30", "30-60", "60-100", "Over 100"],
                ),
            ],
        ),
        category(
            "consulting",
            "Consulting",
            &["Management Consultant", "Business Analyst", "Strategy Advisor"],
            vec![
                choose(
                    "What type of consulting engagements have you delivered?",
                    &["Strategy", "Operations", "Technology", "Change management"],
                ),
                choose(
                    "Are you willing to travel for client engagements?",
                    &["Yes, frequently", "Yes, occasionally", "No"],
                ),
                ask("Describe a client problem you solved and the approach you took."),
            ],
        ),
        category(
            "human_resources",
            "Human Resources",
            &["HR Advisor", "Recruiter", "Talent Acquisition", "People & Culture"],
            vec![
                choose(
                    "Which HR functions have you worked in?",
                    &[
                        "Recruitment",
                        "Employee relations",
                        "Learning & development",
                        "Remuneration",
                        "HR systems",
                    ],
                ),
                choose(
                    "Which HRIS platforms have you used?",
                    &["Workday", "SuccessFactors", "BambooHR", "Employment Hero"],
                ),
                choose("Have you managed end-to-end recruitment campaigns?", &YES_NO),
            ],
        ),
        category(
            "insurance",
            "Insurance",
            &["Claims Officer", "Underwriter", "Insurance Broker", "Loss Adjuster"],
            vec![
                choose(
                    "Which lines of insurance have you worked with?",
                    &["General", "Life", "Health", "Commercial", "Workers compensation"],
                ),
                choose(
                    "Do you hold a Tier 1 or Tier 2 accreditation?",
                    &["Tier 1", "Tier 2", "Neither"],
                ),
                ask("Describe your experience assessing claims."),
            ],
        ),
        category(
            "retail",
            "Retail",
            &["Store Manager", "Sales Assistant", "Visual Merchandiser", "Buyer"],
            vec![
                choose(
                    "Are you available to work weekends and public holidays?",
                    &["Weekends only", "Public holidays only", "Both", "Neither"],
                ),
                choose("Do you have point-of-sale experience?", &YES_NO),
                choose(
                    "What size team have you supervised?",
                    &["None", "1-5 people", "6-15 people", "More than 15 people"],
                ),
            ],
        ),
        category(
            "sales",
            "Sales",
            &["Account Executive", "Business Development Manager", "Sales Representative"],
            vec![
                choose(
                    "What type of sales have you worked in?",
                    &["B2B", "B2C", "Inside sales", "Field sales", "Channel sales"],
                ),
                choose(
                    "Have you consistently met or exceeded sales targets?",
                    &["Always", "Most of the time", "Sometimes", "Rarely"],
                ),
                choose(
                    "Which CRM platforms have you used?",
                    &["Salesforce", "HubSpot", "Pipedrive", "Dynamics 365"],
                ),
                ask("What is the largest deal you have closed?"),
            ],
        ),
    ]
}

fn technology_categories() -> Vec<TaxonomyCategory> {
    vec![
        category(
            "information_technology",
            "Information Technology",
            &["Help Desk", "Systems Administrator", "Network Engineer", "IT Manager"],
            vec![
                choose(
                    "Which operating systems do you support?",
                    &["Windows", "macOS", "Linux"],
                ),
                choose(
                    "Which IT certifications do you hold?",
                    &["CompTIA A+", "CCNA", "Microsoft Certified", "ITIL", "None"],
                ),
                choose("Are you available for on-call support?", &YES_NO),
            ],
        ),
        category(
            "software_development",
            "Software Development",
            &["Software Engineer", "Web Developer", "Mobile Developer", "DevOps Engineer"],
            vec![
                choose(
                    "Which programming languages do you use professionally?",
                    &["JavaScript", "TypeScript", "Python", "Java", "C#", "Go", "Rust"],
                ),
                choose(
                    "Which cloud platforms have you deployed to?",
                    &["AWS", "Azure", "Google Cloud", "None"],
                ),
                choose(
                    "How many years have you worked in a team using version control?",
                    &["Less than 1 year", "1-3 years", "3-5 years", "More than 5 years"],
                ),
                ask("Link to a portfolio or code sample you are proud of."),
            ],
        ),
        category(
            "data_analytics",
            "Data & Analytics",
            &["Data Analyst", "Data Scientist", "BI Developer", "Data Engineer"],
            vec![
                choose(
                    "Which data tools are you proficient in?",
                    &["SQL", "Python", "R", "Power BI", "Tableau", "Excel"],
                ),
                choose("Have you built machine learning models used in production?", &YES_NO),
                ask("Describe an insight you uncovered that changed a business decision."),
            ],
        ),
        category(
            "cyber_security",
            "Cyber Security",
            &["Security Analyst", "Penetration Tester", "Security Architect"],
            vec![
                choose(
                    "Which security certifications do you hold?",
                    &["CISSP", "CISM", "OSCP", "CEH", "Security+", "None"],
                ),
                choose(
                    "Do you hold or are you eligible for a security clearance?",
                    &["Currently hold", "Eligible", "Not eligible"],
                ),
                choose("Have you responded to a live security incident?", &YES_NO),
            ],
        ),
        category(
            "telecommunications",
            "Telecommunications",
            &["Network Technician", "RF Engineer", "Telecommunications Engineer"],
            vec![
                choose(
                    "Which network technologies have you worked with?",
                    &["Fibre", "5G", "4G/LTE", "Microwave", "Satellite"],
                ),
                choose("Do you hold a cabling registration?", &YES_NO),
                choose("Are you comfortable working at heights?", &YES_NO),
            ],
        ),
        category(
            "engineering",
            "Engineering",
            &["Civil Engineer", "Mechanical Engineer", "Electrical Engineer", "Project Engineer"],
            vec![
                choose(
                    "Which engineering discipline is your primary area?",
                    &["Civil", "Mechanical", "Electrical", "Chemical", "Structural"],
                ),
                choose(
                    "Are you a chartered or registered engineer?",
                    &["Chartered", "Registered", "Working towards", "No"],
                ),
                choose(
                    "Which design software do you use?",
                    &["AutoCAD", "SolidWorks", "Revit", "MATLAB", "Civil 3D"],
                ),
            ],
        ),
    ]
}

fn professional_categories() -> Vec<TaxonomyCategory> {
    vec![
        category(
            "legal",
            "Legal",
            &["Lawyer", "Paralegal", "Legal Secretary", "Conveyancer"],
            vec![
                choose(
                    "Are you admitted to practise?",
                    &[
                        "Yes, holding a current practising certificate",
                        "Admitted, not practising",
                        "No",
                    ],
                ),
                choose(
                    "Which areas of law have you practised?",
                    &[
                        "Commercial",
                        "Litigation",
                        "Family",
                        "Property",
                        "Employment",
                        "Criminal",
                    ],
                ),
                choose(
                    "How many years post-qualification experience do you have?",
                    &["0-2 years", "3-5 years", "6-10 years", "More than 10 years"],
                ),
            ],
        ),
        category(
            "government",
            "Government & Defence",
            &["Policy Officer", "Program Manager", "Defence Analyst"],
            vec![
                choose(
                    "Do you hold a current government security clearance?",
                    &["Baseline", "NV1", "NV2", "None"],
                ),
                choose("Have you previously worked in the public sector?", &YES_NO),
                ask("Describe your experience writing briefs or policy submissions."),
            ],
        ),
        category(
            "education",
            "Education & Training",
            &["Teacher", "Trainer", "Tutor", "Lecturer"],
            vec![
                choose(
                    "Do you hold a current working with children check?",
                    &YES_NO,
                ),
                choose(
                    "Which levels have you taught?",
                    &["Early childhood", "Primary", "Secondary", "Tertiary", "Vocational"],
                ),
                choose("Are you a registered teacher?", &YES_NO),
            ],
        ),
        category(
            "science",
            "Science & Research",
            &["Laboratory Technician", "Research Scientist", "Research Assistant"],
            vec![
                choose(
                    "What is your highest qualification in science?",
                    &["Bachelor", "Honours", "Masters", "PhD"],
                ),
                choose("Have you worked in an accredited laboratory?", &YES_NO),
                ask("Summarise your primary research area."),
            ],
        ),
        category(
            "real_estate",
            "Real Estate",
            &["Property Manager", "Sales Agent", "Leasing Consultant"],
            vec![
                choose(
                    "Do you hold a real estate licence or registration?",
                    &["Full licence", "Certificate of registration", "No"],
                ),
                choose(
                    "How many properties have you managed at once?",
                    &["Under 50", "50-100", "100-200", "Over 200"],
                ),
                choose("Do you have a reliable vehicle for inspections?", &YES_NO),
            ],
        ),
        category(
            "community_services",
            "Community Services",
            &["Case Manager", "Youth Worker", "Disability Support Worker"],
            vec![
                choose(
                    "Which checks do you currently hold?",
                    &["Working with children", "Police check", "NDIS worker screening"],
                ),
                choose(
                    "Which client groups have you supported?",
                    &["Youth", "Disability", "Homelessness", "Family services", "Refugees"],
                ),
                ask("Describe how you manage challenging client situations."),
            ],
        ),
    ]
}

fn creative_categories() -> Vec<TaxonomyCategory> {
    vec![
        category(
            "design",
            "Design",
            &["Graphic Designer", "UX Designer", "Product Designer"],
            vec![
                choose(
                    "Which design tools are you proficient in?",
                    &["Figma", "Adobe Photoshop", "Adobe Illustrator", "Sketch", "InDesign"],
                ),
                ask("Link to your design portfolio."),
                choose(
                    "Which design disciplines do you specialise in?",
                    &["Brand", "Digital", "Print", "UX research", "Motion"],
                ),
            ],
        ),
        category(
            "architecture",
            "Architecture",
            &["Architect", "Architectural Drafter", "Interior Designer"],
            vec![
                choose("Are you a registered architect?", &YES_NO),
                choose(
                    "Which project types have you delivered?",
                    &["Residential", "Commercial", "Industrial", "Public", "Heritage"],
                ),
                choose(
                    "Which BIM tools have you used?",
                    &["Revit", "ArchiCAD", "Vectorworks", "SketchUp"],
                ),
            ],
        ),
        category(
            "media",
            "Media & Communications",
            &["Journalist", "Communications Advisor", "Social Media Manager", "Editor"],
            vec![
                choose(
                    "Which media formats have you produced?",
                    &["Print", "Online", "Broadcast", "Podcast", "Social"],
                ),
                ask("Share links to published work."),
                choose("Have you managed media relations or press releases?", &YES_NO),
            ],
        ),
        category(
            "arts",
            "Arts & Entertainment",
            &["Performer", "Event Producer", "Stage Manager", "Musician"],
            vec![
                choose(
                    "Which areas of the arts have you worked in?",
                    &["Theatre", "Music", "Film", "Visual arts", "Live events"],
                ),
                choose("Are you available for evening and weekend performances?", &YES_NO),
                ask("List recent productions or exhibitions you were involved in."),
            ],
        ),
        category(
            "fashion",
            "Fashion & Beauty",
            &["Stylist", "Hairdresser", "Beauty Therapist", "Fashion Designer"],
            vec![
                choose(
                    "Which qualifications do you hold?",
                    &["Certificate III", "Certificate IV", "Diploma", "Degree", "None"],
                ),
                choose("Do you have an existing client base?", &YES_NO),
                ask("Link to a lookbook or portfolio of your work."),
            ],
        ),
    ]
}

fn industry_categories() -> Vec<TaxonomyCategory> {
    vec![
        category(
            "construction",
            "Construction",
            &["Site Supervisor", "Labourer", "Project Manager", "Estimator"],
            vec![
                choose("Do you hold a current construction induction card?", &YES_NO),
                choose(
                    "Which high risk work licences do you hold?",
                    &[
                        "Forklift",
                        "Elevated work platform",
                        "Crane",
                        "Scaffolding",
                        "Dogging",
                        "None",
                    ],
                ),
                choose(
                    "Which project types have you worked on?",
                    &["Residential", "Commercial", "Civil", "Industrial"],
                ),
            ],
        ),
        category(
            "manufacturing",
            "Manufacturing",
            &["Machine Operator", "Production Worker", "Quality Inspector"],
            vec![
                choose(
                    "Which machinery have you operated?",
                    &["CNC", "Press", "Packaging lines", "Injection moulding", "Lathe"],
                ),
                choose("Are you comfortable working rotating shifts?", &YES_NO),
                choose(
                    "Have you worked under a quality management system?",
                    &["ISO 9001", "GMP", "HACCP", "None"],
                ),
            ],
        ),
        category(
            "mining",
            "Mining & Resources",
            &["Haul Truck Operator", "Geologist", "Mining Engineer", "Driller"],
            vec![
                choose(
                    "Are you available for fly-in fly-out rosters?",
                    &["Yes", "Drive-in drive-out only", "No"],
                ),
                choose("Do you hold a current standard 11 or equivalent induction?", &YES_NO),
                choose(
                    "Which mining environments have you worked in?",
                    &["Open cut", "Underground", "Processing plant", "Exploration"],
                ),
            ],
        ),
        category(
            "agriculture",
            "Agriculture",
            &["Farm Hand", "Agronomist", "Station Hand", "Horticulturist"],
            vec![
                choose(
                    "Which agricultural sectors have you worked in?",
                    &["Cropping", "Livestock", "Dairy", "Horticulture", "Viticulture"],
                ),
                choose("Can you operate tractors and farm machinery?", &YES_NO),
                choose("Are you comfortable living on site?", &YES_NO),
            ],
        ),
        category(
            "trades",
            "Trades",
            &["Electrician", "Plumber", "Carpenter", "Painter", "Welder"],
            vec![
                choose(
                    "Which trade qualification do you hold?",
                    &["Licensed tradesperson", "Qualified, unlicensed", "Apprentice", "None"],
                ),
                choose("Do you have your own tools?", &YES_NO),
                choose("Do you have your own vehicle?", &YES_NO),
                ask("Describe the types of jobs you complete most often."),
            ],
        ),
        category(
            "transport_logistics",
            "Transport & Logistics",
            &["Truck Driver", "Warehouse Operator", "Logistics Coordinator", "Courier"],
            vec![
                choose(
                    "Which licence class do you hold?",
                    &[
                        "Car",
                        "Light rigid",
                        "Medium rigid",
                        "Heavy rigid",
                        "Heavy combination",
                        "Multi-combination",
                    ],
                ),
                choose("Do you hold a forklift licence?", &YES_NO),
                choose(
                    "Which warehouse systems have you used?",
                    &["RF scanners", "SAP WM", "Manhattan", "Voice picking"],
                ),
            ],
        ),
        category(
            "hospitality",
            "Hospitality",
            &["Chef", "Barista", "Bartender", "Waiter", "Venue Manager"],
            vec![
                choose(
                    "Which certificates do you hold?",
                    &[
                        "Responsible service of alcohol",
                        "Food safety supervisor",
                        "Responsible conduct of gambling",
                    ],
                ),
                choose(
                    "Which roles have you worked in?",
                    &["Kitchen", "Front of house", "Bar", "Management"],
                ),
                choose("Are you available to work nights and weekends?", &YES_NO),
            ],
        ),
        category(
            "tourism",
            "Tourism",
            &["Tour Guide", "Travel Consultant", "Guest Services"],
            vec![
                choose(
                    "Which languages do you speak fluently?",
                    &["English", "Mandarin", "Japanese", "Spanish", "French", "German"],
                ),
                choose("Do you hold a first aid certificate?", &YES_NO),
                ask("Describe your experience leading groups or itineraries."),
            ],
        ),
        category(
            "automotive",
            "Automotive",
            &["Mechanic", "Auto Electrician", "Panel Beater", "Service Advisor"],
            vec![
                choose(
                    "Which vehicle types have you serviced?",
                    &["Light vehicles", "Heavy vehicles", "Motorcycles", "Electric vehicles"],
                ),
                choose("Do you hold a refrigerant handling licence?", &YES_NO),
                choose(
                    "Which diagnostic tools have you used?",
                    &["OEM scan tools", "Launch", "Bosch KTS", "Snap-on"],
                ),
            ],
        ),
        category(
            "energy",
            "Energy & Utilities",
            &["Line Worker", "Solar Installer", "Plant Operator", "Energy Analyst"],
            vec![
                choose(
                    "Which energy sectors have you worked in?",
                    &["Electricity networks", "Renewables", "Gas", "Water"],
                ),
                choose("Do you hold a current electrical licence?", &YES_NO),
                choose("Have you completed switching or access authority training?", &YES_NO),
            ],
        ),
        category(
            "cleaning",
            "Cleaning & Maintenance",
            &["Cleaner", "Maintenance Technician", "Groundskeeper"],
            vec![
                choose(
                    "Which environments have you cleaned or maintained?",
                    &["Commercial offices", "Healthcare", "Residential", "Industrial", "Schools"],
                ),
                choose("Are you available for early morning or after-hours shifts?", &YES_NO),
                choose("Do you have a current police check?", &YES_NO),
            ],
        ),
        category(
            "security",
            "Security Services",
            &["Security Guard", "Crowd Controller", "Patrol Officer"],
            vec![
                choose(
                    "Which security licence classes do you hold?",
                    &["Unarmed guard", "Crowd control", "Armed guard", "Monitoring", "None"],
                ),
                choose("Do you hold a current first aid certificate?", &YES_NO),
                choose("Are you available for night shifts?", &YES_NO),
            ],
        ),
    ]
}

fn health_categories() -> Vec<TaxonomyCategory> {
    vec![
        category(
            "healthcare",
            "Healthcare",
            &["Doctor", "Allied Health", "Medical Receptionist", "Radiographer"],
            vec![
                choose(
                    "Are you registered with the relevant health practitioner board?",
                    &["Full registration", "Provisional registration", "Not registered"],
                ),
                choose(
                    "Which clinical settings have you worked in?",
                    &["Hospital", "Private practice", "Community health", "Telehealth"],
                ),
                choose("Are your immunisations up to date for healthcare work?", &YES_NO),
            ],
        ),
        category(
            "nursing",
            "Nursing",
            &["Registered Nurse", "Enrolled Nurse", "Nurse Unit Manager", "Midwife"],
            vec![
                choose(
                    "What is your nursing registration type?",
                    &["Registered nurse", "Enrolled nurse", "Midwife", "Nurse practitioner"],
                ),
                choose(
                    "Which specialties have you worked in?",
                    &[
                        "Emergency",
                        "Intensive care",
                        "Theatre",
                        "Paediatrics",
                        "Mental health",
                        "General ward",
                    ],
                ),
                choose(
                    "Which shifts are you available for?",
                    &["Day", "Evening", "Night", "Weekend"],
                ),
            ],
        ),
        category(
            "aged_care",
            "Aged Care",
            &["Personal Care Assistant", "Aged Care Worker", "Lifestyle Coordinator"],
            vec![
                choose(
                    "Which qualifications do you hold?",
                    &[
                        "Certificate III in Individual Support",
                        "Certificate IV in Ageing Support",
                        "None",
                    ],
                ),
                choose("Have you worked in residential aged care?", &YES_NO),
                choose("Do you have experience with dementia care?", &YES_NO),
            ],
        ),
        category(
            "mental_health",
            "Mental Health",
            &["Psychologist", "Counsellor", "Mental Health Support Worker"],
            vec![
                choose(
                    "What is your registration status?",
                    &[
                        "General psychologist",
                        "Clinical psychologist",
                        "Registered counsellor",
                        "Not registered",
                    ],
                ),
                choose(
                    "Which therapeutic approaches do you use?",
                    &["CBT", "ACT", "DBT", "Trauma-informed care", "Motivational interviewing"],
                ),
                ask("Describe your experience with crisis intervention."),
            ],
        ),
        category(
            "pharmacy",
            "Pharmacy",
            &["Pharmacist", "Pharmacy Assistant", "Dispensary Technician"],
            vec![
                choose("Are you a registered pharmacist?", &YES_NO),
                choose(
                    "Which dispensing systems have you used?",
                    &["Fred", "Z Software", "Minfos", "LOTS"],
                ),
                choose("Are you accredited to administer vaccinations?", &YES_NO),
            ],
        ),
        category(
            "fitness",
            "Fitness & Wellness",
            &["Personal Trainer", "Group Fitness Instructor", "Massage Therapist"],
            vec![
                choose(
                    "Which fitness qualifications do you hold?",
                    &["Certificate III in Fitness", "Certificate IV in Fitness", "Diploma", "None"],
                ),
                choose("Do you hold current CPR and first aid certificates?", &YES_NO),
                ask("Which training styles or classes do you specialise in?"),
            ],
        ),
    ]
}
