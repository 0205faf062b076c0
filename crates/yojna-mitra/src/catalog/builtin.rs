use super::domain::{
    EligibilityRule, IncomeBracket, LocalizedList, LocalizedText, Program, ProgramId, ProgramKind,
};

fn text(en: &str, hi: &str) -> LocalizedText {
    LocalizedText {
        en: en.to_string(),
        hi: hi.to_string(),
    }
}

fn list(en: &[&str], hi: &[&str]) -> LocalizedList {
    LocalizedList {
        en: en.iter().map(|item| item.to_string()).collect(),
        hi: hi.iter().map(|item| item.to_string()).collect(),
    }
}

/// The program set shipped with the binary, used when no catalog file is
/// configured. Scores are the catalog authors' relevance estimates.
pub(crate) fn bundled_programs() -> Vec<Program> {
    vec![
        Program {
            id: ProgramId("pm_kisan".to_string()),
            name: text(
                "PM-Kisan Samman Nidhi",
                "प्रधानमंत्री किसान सम्मान निधि",
            ),
            description: text(
                "Income support of \u{20b9}6,000 per year for land-holding farmer families, paid in three installments.",
                "भूमिधारक किसान परिवारों को प्रति वर्ष \u{20b9}6,000 की आय सहायता, तीन किस्तों में।",
            ),
            kind: ProgramKind::Central,
            base_score: 95,
            eligibility: EligibilityRule {
                min_age: Some(18),
                occupations: vec!["farmer".to_string()],
                ..EligibilityRule::default()
            },
            criteria: list(
                &[
                    "Land-holding farmer family",
                    "Aadhaar linked to an active bank account",
                    "Not an income tax payer",
                ],
                &[
                    "भूमिधारक किसान परिवार",
                    "आधार सक्रिय बैंक खाते से जुड़ा हो",
                    "आयकर दाता न हो",
                ],
            ),
            benefits: list(
                &["\u{20b9}2,000 every four months by direct transfer"],
                &["हर चार महीने \u{20b9}2,000 सीधे खाते में"],
            ),
            documents: list(
                &["Aadhaar card", "Land records", "Bank passbook"],
                &["आधार कार्ड", "भूमि अभिलेख", "बैंक पासबुक"],
            ),
            steps: list(
                &[
                    "Register on the PM-Kisan portal or at a Common Service Centre",
                    "Submit land records for verification",
                    "Track installment status online",
                ],
                &[
                    "पीएम-किसान पोर्टल या जन सेवा केंद्र पर पंजीकरण करें",
                    "सत्यापन के लिए भूमि अभिलेख जमा करें",
                    "किस्त की स्थिति ऑनलाइन देखें",
                ],
            ),
            application_link: "https://pmkisan.gov.in".to_string(),
        },
        Program {
            id: ProgramId("ayushman_bharat".to_string()),
            name: text("Ayushman Bharat PM-JAY", "आयुष्मान भारत पीएम-जय"),
            description: text(
                "Health cover of \u{20b9}5 lakh per family per year for secondary and tertiary hospitalization.",
                "द्वितीयक और तृतीयक अस्पताल भर्ती के लिए प्रति परिवार प्रति वर्ष \u{20b9}5 लाख का स्वास्थ्य कवर।",
            ),
            kind: ProgramKind::Central,
            base_score: 90,
            eligibility: EligibilityRule {
                max_income: Some(IncomeBracket::OneToThreeLakh),
                ..EligibilityRule::default()
            },
            criteria: list(
                &[
                    "Household listed in SECC deprivation categories",
                    "Annual income within the program ceiling",
                ],
                &[
                    "एसईसीसी वंचना सूची में शामिल परिवार",
                    "वार्षिक आय योजना सीमा के भीतर",
                ],
            ),
            benefits: list(
                &["Cashless treatment at empanelled hospitals"],
                &["सूचीबद्ध अस्पतालों में कैशलेस इलाज"],
            ),
            documents: list(
                &["Aadhaar card", "Ration card"],
                &["आधार कार्ड", "राशन कार्ड"],
            ),
            steps: list(
                &[
                    "Check family eligibility on the PM-JAY portal",
                    "Generate the Ayushman card at an empanelled centre",
                    "Present the card at admission",
                ],
                &[
                    "पीएम-जय पोर्टल पर पात्रता जांचें",
                    "सूचीबद्ध केंद्र पर आयुष्मान कार्ड बनवाएं",
                    "भर्ती के समय कार्ड दिखाएं",
                ],
            ),
            application_link: "https://pmjay.gov.in".to_string(),
        },
        Program {
            id: ProgramId("pmay_gramin".to_string()),
            name: text("PM Awas Yojana (Gramin)", "प्रधानमंत्री आवास योजना (ग्रामीण)"),
            description: text(
                "Financial assistance for building a pucca house for houseless rural families.",
                "ग्रामीण आवासहीन परिवारों को पक्का घर बनाने के लिए वित्तीय सहायता।",
            ),
            kind: ProgramKind::Central,
            base_score: 88,
            eligibility: EligibilityRule {
                max_income: Some(IncomeBracket::ThreeToEightLakh),
                ..EligibilityRule::default()
            },
            criteria: list(
                &[
                    "Houseless family or living in a kutcha house",
                    "Not previously covered by a housing program",
                ],
                &[
                    "आवासहीन परिवार या कच्चे घर में निवास",
                    "पहले किसी आवास योजना का लाभ न लिया हो",
                ],
            ),
            benefits: list(
                &["Construction assistance paid in stages"],
                &["चरणों में निर्माण सहायता"],
            ),
            documents: list(
                &["Aadhaar card", "Bank passbook", "Job card (if any)"],
                &["आधार कार्ड", "बैंक पासबुक", "जॉब कार्ड (यदि हो)"],
            ),
            steps: list(
                &[
                    "Verify inclusion in the permanent wait list at the gram panchayat",
                    "Submit documents to the block office",
                    "Receive sanction and stage-wise payments",
                ],
                &[
                    "ग्राम पंचायत की स्थायी प्रतीक्षा सूची में नाम जांचें",
                    "ब्लॉक कार्यालय में दस्तावेज़ जमा करें",
                    "स्वीकृति और चरणबद्ध भुगतान प्राप्त करें",
                ],
            ),
            application_link: "https://pmayg.nic.in".to_string(),
        },
        Program {
            id: ProgramId("mh_shetkari_sanman".to_string()),
            name: text(
                "Namo Shetkari Mahasanman Nidhi",
                "नमो शेतकरी महासन्मान निधी",
            ),
            description: text(
                "Maharashtra state top-up income support for farmer families receiving PM-Kisan.",
                "पीएम-किसान प्राप्त करने वाले किसान परिवारों के लिए महाराष्ट्र राज्य की अतिरिक्त आय सहायता।",
            ),
            kind: ProgramKind::State,
            base_score: 85,
            eligibility: EligibilityRule {
                min_age: Some(18),
                occupations: vec!["farmer".to_string()],
                states: vec!["Maharashtra".to_string()],
                ..EligibilityRule::default()
            },
            criteria: list(
                &[
                    "Registered PM-Kisan beneficiary",
                    "Resident of Maharashtra",
                ],
                &[
                    "पंजीकृत पीएम-किसान लाभार्थी",
                    "महाराष्ट्र का निवासी",
                ],
            ),
            benefits: list(
                &["Additional \u{20b9}6,000 per year from the state"],
                &["राज्य से प्रति वर्ष अतिरिक्त \u{20b9}6,000"],
            ),
            documents: list(
                &["PM-Kisan registration number", "Aadhaar card"],
                &["पीएम-किसान पंजीकरण संख्या", "आधार कार्ड"],
            ),
            steps: list(
                &[
                    "No separate application; state verifies the PM-Kisan roll",
                    "Confirm bank seeding at a Common Service Centre",
                ],
                &[
                    "अलग आवेदन नहीं; राज्य पीएम-किसान सूची सत्यापित करता है",
                    "जन सेवा केंद्र पर बैंक सीडिंग की पुष्टि करें",
                ],
            ),
            application_link: "https://nsmny.mahait.org".to_string(),
        },
        Program {
            id: ProgramId("nsp_scholarship".to_string()),
            name: text(
                "National Scholarship Portal Schemes",
                "राष्ट्रीय छात्रवृत्ति पोर्टल योजनाएं",
            ),
            description: text(
                "Merit and means based scholarships for students from pre-matric to postgraduate levels.",
                "प्री-मैट्रिक से स्नातकोत्तर स्तर तक के विद्यार्थियों के लिए मेधा और आय आधारित छात्रवृत्तियां।",
            ),
            kind: ProgramKind::Central,
            base_score: 82,
            eligibility: EligibilityRule {
                max_age: Some(35),
                max_income: Some(IncomeBracket::ThreeToEightLakh),
                occupations: vec!["student".to_string()],
                ..EligibilityRule::default()
            },
            criteria: list(
                &[
                    "Enrolled in a recognized institution",
                    "Family income within the scheme ceiling",
                ],
                &[
                    "मान्यता प्राप्त संस्थान में नामांकित",
                    "पारिवारिक आय योजना सीमा के भीतर",
                ],
            ),
            benefits: list(
                &["Tuition and maintenance allowance credited yearly"],
                &["शिक्षण शुल्क और निर्वाह भत्ता वार्षिक रूप से जमा"],
            ),
            documents: list(
                &["Income certificate", "Previous marksheet", "Bank passbook"],
                &["आय प्रमाण पत्र", "पिछली अंकतालिका", "बैंक पासबुक"],
            ),
            steps: list(
                &[
                    "Register on the National Scholarship Portal",
                    "Apply to the matching scheme before the deadline",
                    "Institute and state verify the application",
                ],
                &[
                    "राष्ट्रीय छात्रवृत्ति पोर्टल पर पंजीकरण करें",
                    "समय सीमा से पहले उपयुक्त योजना में आवेदन करें",
                    "संस्थान और राज्य आवेदन सत्यापित करते हैं",
                ],
            ),
            application_link: "https://scholarships.gov.in".to_string(),
        },
        Program {
            id: ProgramId("pm_mudra".to_string()),
            name: text("PM Mudra Yojana", "प्रधानमंत्री मुद्रा योजना"),
            description: text(
                "Collateral-free loans up to \u{20b9}10 lakh for non-farm micro enterprises.",
                "गैर-कृषि सूक्ष्म उद्यमों के लिए \u{20b9}10 लाख तक का बिना गारंटी ऋण।",
            ),
            kind: ProgramKind::Central,
            base_score: 78,
            eligibility: EligibilityRule {
                min_age: Some(18),
                occupations: vec!["business".to_string(), "worker".to_string(), "unemployed".to_string()],
                ..EligibilityRule::default()
            },
            criteria: list(
                &[
                    "Income-generating non-farm activity, existing or planned",
                    "No default on existing bank loans",
                ],
                &[
                    "आय अर्जित करने वाली गैर-कृषि गतिविधि, मौजूदा या प्रस्तावित",
                    "किसी बैंक ऋण में चूक न हो",
                ],
            ),
            benefits: list(
                &["Shishu, Kishor, and Tarun loan tiers up to \u{20b9}10 lakh"],
                &["शिशु, किशोर और तरुण श्रेणियों में \u{20b9}10 लाख तक ऋण"],
            ),
            documents: list(
                &["Identity proof", "Business plan or quotation", "Address proof"],
                &["पहचान प्रमाण", "व्यवसाय योजना या कोटेशन", "पते का प्रमाण"],
            ),
            steps: list(
                &[
                    "Approach any member bank or apply on the Udyamimitra portal",
                    "Submit the business plan with documents",
                    "Bank appraises and sanctions the loan",
                ],
                &[
                    "किसी सदस्य बैंक में जाएं या उद्यमीमित्र पोर्टल पर आवेदन करें",
                    "दस्तावेज़ों के साथ व्यवसाय योजना जमा करें",
                    "बैंक मूल्यांकन कर ऋण स्वीकृत करता है",
                ],
            ),
            application_link: "https://www.mudra.org.in".to_string(),
        },
        Program {
            id: ProgramId("ignoaps_pension".to_string()),
            name: text(
                "Indira Gandhi National Old Age Pension",
                "इंदिरा गांधी राष्ट्रीय वृद्धावस्था पेंशन",
            ),
            description: text(
                "Monthly pension for below-poverty-line citizens aged 60 and above.",
                "60 वर्ष और उससे अधिक आयु के गरीबी रेखा से नीचे के नागरिकों के लिए मासिक पेंशन।",
            ),
            kind: ProgramKind::Central,
            base_score: 70,
            eligibility: EligibilityRule {
                min_age: Some(60),
                max_income: Some(IncomeBracket::BelowOneLakh),
                ..EligibilityRule::default()
            },
            criteria: list(
                &["Aged 60 or above", "Household below the poverty line"],
                &["आयु 60 वर्ष या अधिक", "परिवार गरीबी रेखा से नीचे"],
            ),
            benefits: list(
                &["Monthly pension credited to the bank account"],
                &["मासिक पेंशन बैंक खाते में जमा"],
            ),
            documents: list(
                &["Age proof", "BPL card", "Bank passbook"],
                &["आयु प्रमाण", "बीपीएल कार्ड", "बैंक पासबुक"],
            ),
            steps: list(
                &[
                    "Apply at the gram panchayat or municipal office",
                    "Verification by the social welfare department",
                    "Pension starts after sanction",
                ],
                &[
                    "ग्राम पंचायत या नगर कार्यालय में आवेदन करें",
                    "समाज कल्याण विभाग द्वारा सत्यापन",
                    "स्वीकृति के बाद पेंशन शुरू",
                ],
            ),
            application_link: "https://nsap.nic.in".to_string(),
        },
    ]
}
