//! Static portfolio content.
//!
//! Read-only structured records consumed by the layout and rendering layers.
//! The core never mutates these and never inspects the certificate image
//! files they reference (paths are passed through as-is).

/// Work history entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ExperienceEntry {
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub highlights: &'static [&'static str],
    pub current: bool,
}

/// Education entry.
#[derive(Debug, Clone, PartialEq)]
pub struct EducationEntry {
    pub degree: &'static str,
    pub field: &'static str,
    pub institution: &'static str,
}

/// A certificate with a viewable image.
#[derive(Debug, Clone, PartialEq)]
pub struct Certification {
    pub name: &'static str,
    pub subtitle: &'static str,
    pub organization: &'static str,
    pub year: &'static str,
    /// Image path, passed through to the lightbox untouched.
    pub image: &'static str,
}

/// Skill with a proficiency percentage (drives the skill bars).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoreSkill {
    pub name: &'static str,
    pub proficiency: u8,
}

/// Spoken language.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Language {
    pub name: &'static str,
    pub level: &'static str,
}

/// Contact method shown in the hero and contact sections.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactMethod {
    pub label: &'static str,
    pub value: &'static str,
    pub link: Option<&'static str>,
}

/// Headline stat (value + caption).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

/// The whole portfolio.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub name: &'static str,
    pub title: &'static str,
    pub greeting: &'static str,
    pub summary: &'static str,
    pub location: &'static str,
    pub stats: Vec<Stat>,
    pub features: Vec<(&'static str, &'static str)>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub certifications: Vec<Certification>,
    pub skills: Vec<&'static str>,
    pub core_skills: Vec<CoreSkill>,
    pub languages: Vec<Language>,
    pub contact: Vec<ContactMethod>,
}

/// Build the shipped portfolio content.
pub fn profile() -> Profile {
    Profile {
        name: "Hassan Zahid-ul Hassan",
        title: "Operations Coordinator",
        greeting: "Welcome to my portfolio",
        summary: "Resourceful professional in management operations, known for \
                  high productivity and efficient task completion. Specialized \
                  in strategic planning, team leadership, and operational \
                  improvement.",
        location: "Salwa, Kuwait",
        stats: vec![
            Stat { value: "5+", label: "Years Exp." },
            Stat { value: "5", label: "Companies" },
            Stat { value: "4", label: "Languages" },
        ],
        features: vec![
            ("Strategic Planning", "Data-driven decision making"),
            ("Team Leadership", "Building high-performance teams"),
            ("Process Optimization", "Continuous improvement"),
            ("Quality Assurance", "Maintaining excellence"),
        ],
        experience: vec![
            ExperienceEntry {
                title: "Operations Coordinator",
                company: "WIYAK",
                location: "Sharq, Kuwait City",
                period: "March 2025 - Present",
                description: "Coordinated daily ride assignments across a large \
                              fleet of professional drivers, ensuring optimal \
                              coverage and efficiency. Managed real-time dispatch \
                              operations using GPS and ETA tools.",
                highlights: &[
                    "Fleet Management",
                    "GPS Dispatch",
                    "Route Optimization",
                    "Driver Coordination",
                ],
                current: true,
            },
            ExperienceEntry {
                title: "Assistant Accountant Intern",
                company: "Amwaaj Dental Center",
                location: "Salmiya, Kuwait",
                period: "January 2025 - February 2025",
                description: "Managed daily bookkeeping functions with attention \
                              to accounts receivable, accounts payable, banking \
                              reconciliation and disbursements.",
                highlights: &["Bookkeeping", "Financial Reconciliation", "Budget Preparation"],
                current: false,
            },
            ExperienceEntry {
                title: "Inbound Operations Coordinator",
                company: "Boutiqaat Operations",
                location: "Sulaibiya, Kuwait",
                period: "September 2021 - February 2025",
                description: "Coordinated day-to-day warehouse operations, \
                              including inventory management, order fulfillment, \
                              and logistics. Led a team to ensure timely \
                              processing of orders.",
                highlights: &["Warehouse Operations", "Inventory Management", "Team Leadership"],
                current: false,
            },
            ExperienceEntry {
                title: "Data Entry",
                company: "United Laboratories Company",
                location: "Kuwait City, Kuwait",
                period: "January 2023 - March 2023",
                description: "Performed accurate data entry and administrative \
                              tasks to support operational needs. Created \
                              detailed reports on data entry activities.",
                highlights: &["Data Entry", "Record Management", "Report Creation"],
                current: false,
            },
            ExperienceEntry {
                title: "Auditing Coordinator",
                company: "Nestle",
                location: "Al Kuwait, Kuwait",
                period: "August 2021 - August 2022",
                description: "Conducted comprehensive audits of internal \
                              processes, ensuring compliance with company \
                              policies and industry standards.",
                highlights: &["Internal Auditing", "Compliance", "Financial Analysis"],
                current: false,
            },
        ],
        education: vec![
            EducationEntry {
                degree: "Bachelor of Science (Honors)",
                field: "Business Management",
                institution: "University of Derby, UK",
            },
            EducationEntry {
                degree: "Higher Secondary Certificate +2",
                field: "General Science",
                institution: "Pakistan School & College, Kuwait (PSCK)",
            },
            EducationEntry {
                degree: "Secondary School Certificate (SSC)",
                field: "",
                institution: "New Pakistan International School, Kuwait (NPIS)",
            },
        ],
        certifications: vec![
            Certification {
                name: "Certificate of Excellence",
                subtitle: "Inbound Operations",
                organization: "Boutiqaat",
                year: "2023",
                image: "assets/images/boutiqaat-cert.jpg",
            },
            Certification {
                name: "OTHM Extended Level 5 Diploma",
                subtitle: "Business Management",
                organization: "OTHM Qualifications",
                year: "2023",
                image: "assets/images/othm-cert-1.png",
            },
            Certification {
                name: "Bachelor Degree Certificate",
                subtitle: "Business Management",
                organization: "University of Derby, UK",
                year: "Completed",
                image: "assets/images/degree-cert-1.png",
            },
        ],
        skills: vec![
            "Microsoft Excel",
            "Microsoft Word",
            "Microsoft PowerPoint",
            "Microsoft Outlook",
            "Warehouse Management",
            "Team Leadership",
            "Process Optimization",
            "Logistics Coordination",
            "Inventory Control",
            "Reporting & Documentation",
            "Data Entry & Management",
            "Audit Compliance",
            "Stakeholder Management",
            "Effective Communication",
            "Quality Assurance",
            "Administrative Management",
            "Vendor Engagement",
            "Customer Invoicing",
        ],
        core_skills: vec![
            CoreSkill { name: "Microsoft Office Suite", proficiency: 95 },
            CoreSkill { name: "Warehouse Management", proficiency: 92 },
            CoreSkill { name: "Logistics Coordination", proficiency: 90 },
            CoreSkill { name: "Team Leadership", proficiency: 88 },
        ],
        languages: vec![
            Language { name: "Urdu", level: "Native" },
            Language { name: "English", level: "Expert" },
            Language { name: "Hindi", level: "Expert" },
            Language { name: "Arabic", level: "Intermediate" },
        ],
        contact: vec![
            ContactMethod {
                label: "Email",
                value: "hasankwt2222@outlook.com",
                link: Some("mailto:hasankwt2222@outlook.com"),
            },
            ContactMethod {
                label: "Phone",
                value: "+965 69335882",
                link: Some("tel:+96569335882"),
            },
            ContactMethod {
                label: "Location",
                value: "Salwa, Kuwait",
                link: None,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_is_populated() {
        let p = profile();
        assert_eq!(p.experience.len(), 5);
        assert_eq!(p.education.len(), 3);
        assert_eq!(p.certifications.len(), 3);
        assert_eq!(p.languages.len(), 4);
        assert!(!p.skills.is_empty());
        assert!(!p.contact.is_empty());
    }

    #[test]
    fn test_exactly_one_current_position() {
        let p = profile();
        let current = p.experience.iter().filter(|e| e.current).count();
        assert_eq!(current, 1);
        assert!(p.experience[0].current);
    }

    #[test]
    fn test_certifications_reference_images() {
        let p = profile();
        for cert in &p.certifications {
            assert!(!cert.image.is_empty());
            assert!(!cert.name.is_empty());
        }
    }
}
