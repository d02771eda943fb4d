//! Static service catalog backing the services pages.
//!
//! The three offerings are fixed site content, not store rows; an unknown
//! slug resolves to None and the page renders its not-found affordance.

/// The three brokered service lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    Selling,
    Buying,
    Leasing,
}

impl ServiceKind {
    /// URL slug for the service detail route.
    pub fn slug(&self) -> &'static str {
        match self {
            ServiceKind::Selling => "selling",
            ServiceKind::Buying => "buying",
            ServiceKind::Leasing => "leasing",
        }
    }
}

impl std::fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.slug())
    }
}

/// One step in a service engagement.
#[derive(Debug, Clone, Copy)]
pub struct ProcessStep {
    pub title: &'static str,
    pub description: &'static str,
}

/// A service line: card copy, detail copy, benefit list, and the
/// engagement process.
#[derive(Debug, Clone, Copy)]
pub struct ServiceOffering {
    pub kind: ServiceKind,
    /// Short name used on the home page service cards.
    pub name: &'static str,
    /// One-line card copy for the home page.
    pub blurb: &'static str,
    /// Detail page title.
    pub title: &'static str,
    pub summary: &'static str,
    pub benefits: &'static [&'static str],
    pub process: &'static [ProcessStep],
}

impl ServiceOffering {
    /// All offerings, in display order.
    pub fn all() -> &'static [ServiceOffering] {
        CATALOG
    }

    /// Look up an offering by its URL slug.
    pub fn find(slug: &str) -> Option<&'static ServiceOffering> {
        CATALOG.iter().find(|s| s.kind.slug() == slug)
    }
}

static CATALOG: &[ServiceOffering] = &[
    ServiceOffering {
        kind: ServiceKind::Selling,
        name: "IP Selling",
        blurb: "Maximize the value of your intellectual property with our expert selling \
                services and global network.",
        title: "IP Selling Services",
        summary: "Maximize the value of your intellectual property portfolio with our \
                  comprehensive selling services.",
        benefits: &[
            "Accurate IP valuation and market analysis",
            "Strategic positioning to attract premium buyers",
            "Global network of qualified buyers across industries",
            "Complete transaction management and legal support",
            "Confidential negotiation and deal structuring",
            "Post-sale support and documentation",
        ],
        process: &[
            ProcessStep {
                title: "Initial Consultation",
                description: "We assess your IP portfolio and discuss your goals",
            },
            ProcessStep {
                title: "Valuation & Analysis",
                description: "Comprehensive market analysis and valuation report",
            },
            ProcessStep {
                title: "Marketing Strategy",
                description: "Targeted outreach to qualified buyers in your industry",
            },
            ProcessStep {
                title: "Negotiation",
                description: "Expert negotiation to secure the best possible terms",
            },
            ProcessStep {
                title: "Transaction Closing",
                description: "Complete legal and financial transaction management",
            },
            ProcessStep {
                title: "Post-Sale Support",
                description: "Ongoing support for transition and documentation",
            },
        ],
    },
    ServiceOffering {
        kind: ServiceKind::Buying,
        name: "IP Buying",
        blurb: "Acquire strategic IP assets to strengthen your competitive position and \
                drive innovation.",
        title: "IP Buying Services",
        summary: "Acquire strategic intellectual property assets to strengthen your \
                  competitive position and accelerate innovation.",
        benefits: &[
            "Access to exclusive IP portfolios before public listing",
            "Due diligence and comprehensive IP analysis",
            "Strategic acquisition planning and consultation",
            "Negotiation support and deal structuring",
            "Risk assessment and legal validation",
            "Integration support and knowledge transfer",
        ],
        process: &[
            ProcessStep {
                title: "Needs Assessment",
                description: "Define your strategic IP requirements and objectives",
            },
            ProcessStep {
                title: "Market Research",
                description: "Identify available IP assets matching your criteria",
            },
            ProcessStep {
                title: "Due Diligence",
                description: "Comprehensive analysis of IP validity and value",
            },
            ProcessStep {
                title: "Negotiation",
                description: "Strategic negotiation to secure favorable terms",
            },
            ProcessStep {
                title: "Acquisition",
                description: "Complete transaction and transfer process",
            },
            ProcessStep {
                title: "Integration",
                description: "Support for IP integration into your portfolio",
            },
        ],
    },
    ServiceOffering {
        kind: ServiceKind::Leasing,
        name: "IP Leasing",
        blurb: "Generate revenue from your IP portfolio through flexible leasing \
                arrangements.",
        title: "IP Leasing Services",
        summary: "Generate consistent revenue from your IP portfolio through strategic \
                  leasing arrangements.",
        benefits: &[
            "Revenue generation without selling IP assets",
            "Flexible licensing terms and structures",
            "Ongoing royalty management and collection",
            "License compliance monitoring",
            "Strategic partnership facilitation",
            "Portfolio optimization consulting",
        ],
        process: &[
            ProcessStep {
                title: "Portfolio Review",
                description: "Evaluate your IP assets for leasing potential",
            },
            ProcessStep {
                title: "Terms Development",
                description: "Create optimal licensing terms and structures",
            },
            ProcessStep {
                title: "Licensee Matching",
                description: "Identify and vet potential licensees",
            },
            ProcessStep {
                title: "Agreement Drafting",
                description: "Comprehensive licensing agreements",
            },
            ProcessStep {
                title: "Deal Execution",
                description: "Finalize agreements and initiate licensing",
            },
            ProcessStep {
                title: "Ongoing Management",
                description: "Royalty tracking and compliance monitoring",
            },
        ],
    },
];
