//! The five case studies, as structured content for the document viewer.

use super::{Block, CaseStudy, Section};
use once_cell::sync::Lazy;

pub fn case_studies() -> &'static [CaseStudy] {
    &CASE_STUDIES
}

static CASE_STUDIES: Lazy<Vec<CaseStudy>> = Lazy::new(|| {
    vec![
        hiver_analytics(),
        agent_client_connections(),
        hiver_experience_redesign(),
        ibc_franchise(),
        ibc_design_system(),
    ]
});

fn hiver_analytics() -> CaseStudy {
    CaseStudy {
        slug: "hiver-analytics",
        title: "Hiver Analytics",
        summary: "Reporting that support leads actually open: from raw CSV exports to \
                  an in-product analytics suite.",
        sections: vec![
            Section {
                id: "context",
                title: "Context",
                blocks: vec![
                    Block::Paragraph(
                        "Hiver's support teams ran their weekly reviews off CSV exports. \
                         Team leads spent hours in spreadsheets rebuilding the same \
                         charts, and most customers never touched reporting at all.",
                    ),
                    Block::Image {
                        src: "/images/hiver-analytics/before.png",
                        alt: "Spreadsheet-based reporting before the redesign",
                    },
                ],
                slides: vec![],
            },
            Section {
                id: "research",
                title: "Research",
                blocks: vec![
                    Block::Paragraph(
                        "Interviews with fourteen team leads surfaced three jobs: spot \
                         workload spikes early, coach individual agents, and prove SLA \
                         compliance upward. Everything else was noise.",
                    ),
                    Block::Quote {
                        text: "I don't need more charts. I need to know who is drowning \
                               before Friday.",
                        attribution: "Support lead, mid-market customer",
                    },
                ],
                slides: vec![
                    Block::Paragraph("Job one: spot workload spikes early."),
                    Block::Paragraph("Job two: coach agents with evidence, not anecdotes."),
                    Block::Paragraph("Job three: prove SLA compliance to leadership."),
                ],
            },
            Section {
                id: "design",
                title: "Design",
                blocks: vec![
                    Block::Paragraph(
                        "The suite leads with a conversation-volume heatmap and drill-downs \
                         per agent and per mailbox. Defaults answer the three jobs without \
                         configuration; everything deeper is progressive disclosure.",
                    ),
                    Block::Image {
                        src: "/images/hiver-analytics/dashboard.png",
                        alt: "Final analytics dashboard",
                    },
                ],
                slides: vec![],
            },
            Section {
                id: "outcome",
                title: "Outcome",
                blocks: vec![Block::Paragraph(
                    "Weekly active usage of reporting went from 11% to 64% of team leads \
                     in two quarters, and analytics became a cited reason in enterprise \
                     deal wins.",
                )],
                slides: vec![],
            },
        ],
    }
}

fn agent_client_connections() -> CaseStudy {
    CaseStudy {
        slug: "agent-client-connections",
        title: "Agent-Client Connections",
        summary: "Pairing support agents with the right conversations at the right time.",
        sections: vec![
            Section {
                id: "problem",
                title: "Problem",
                blocks: vec![Block::Paragraph(
                    "Round-robin assignment treated every conversation as identical. \
                     Complex threads landed on new hires while senior agents cleared \
                     one-line questions, and reassignments ate a fifth of handling time.",
                )],
                slides: vec![],
            },
            Section {
                id: "exploration",
                title: "Exploration",
                blocks: vec![
                    Block::Paragraph(
                        "We prototyped three assignment models: skill tags, historical \
                         familiarity with the requester, and live workload balancing. \
                         Familiarity won in moderated tests; agents trusted it because \
                         they could see why a thread was theirs.",
                    ),
                    Block::Image {
                        src: "/images/agent-client/prototypes.png",
                        alt: "Three assignment model prototypes",
                    },
                ],
                slides: vec![
                    Block::Paragraph("Model A: skill-tag routing."),
                    Block::Paragraph("Model B: requester familiarity."),
                    Block::Paragraph("Model C: live workload balancing."),
                ],
            },
            Section {
                id: "shipping",
                title: "Shipping",
                blocks: vec![Block::Paragraph(
                    "The shipped design blends familiarity with a workload cap and shows \
                     the reason inline on every assignment. Reassignment dropped by half \
                     in the pilot cohort.",
                )],
                slides: vec![],
            },
        ],
    }
}

fn hiver_experience_redesign() -> CaseStudy {
    CaseStudy {
        slug: "hiver-experience-redesign",
        title: "Hiver Experience Redesign",
        summary: "Rebuilding the core inbox around focus, without breaking ten thousand \
                  daily habits.",
        sections: vec![
            Section {
                id: "why",
                title: "Why now",
                blocks: vec![Block::Paragraph(
                    "Six years of feature growth had left the inbox with four sidebars \
                     worth of chrome. New users took eleven days to reach their first \
                     productive session.",
                )],
                slides: vec![],
            },
            Section {
                id: "principles",
                title: "Principles",
                blocks: vec![
                    Block::Paragraph(
                        "Three principles governed every screen: the conversation is the \
                         hero, chrome earns its pixels, and no retraining for existing \
                         muscle memory on the five most-used actions.",
                    ),
                    Block::Quote {
                        text: "Redesigns fail when they ask users to pay for the team's \
                               spring cleaning.",
                        attribution: "Project kickoff note",
                    },
                ],
                slides: vec![],
            },
            Section {
                id: "rollout",
                title: "Rollout",
                blocks: vec![
                    Block::Paragraph(
                        "We shipped behind an opt-in toggle for a full quarter, instrumented \
                         regret signals (toggle-back within a session), and only defaulted \
                         the new experience once weekly regret fell under 2%.",
                    ),
                    Block::Image {
                        src: "/images/hiver-redesign/rollout.png",
                        alt: "Opt-in rollout dashboard",
                    },
                ],
                slides: vec![],
            },
            Section {
                id: "results",
                title: "Results",
                blocks: vec![Block::Paragraph(
                    "Time-to-first-productive-session fell from eleven days to four; \
                     support tickets about 'where did X go' stayed under a dozen for the \
                     entire rollout.",
                )],
                slides: vec![],
            },
        ],
    }
}

fn ibc_franchise() -> CaseStudy {
    CaseStudy {
        slug: "ibc-franchise",
        title: "IBC Franchise Portal",
        summary: "One portal for three hundred franchisees with wildly different \
                  digital comfort levels.",
        sections: vec![
            Section {
                id: "landscape",
                title: "Landscape",
                blocks: vec![Block::Paragraph(
                    "Franchise owners ranged from spreadsheet power users to owners who \
                     ran their stores from a phone. The old portal served neither: a \
                     desktop-only intranet with nested menus nine levels deep.",
                )],
                slides: vec![],
            },
            Section {
                id: "approach",
                title: "Approach",
                blocks: vec![
                    Block::Paragraph(
                        "We collapsed the information architecture around the monthly \
                         operating rhythm: ordering, compliance, payroll, promotions. \
                         Each rhythm became one mobile-first flow with a single entry \
                         point.",
                    ),
                    Block::Image {
                        src: "/images/ibc-franchise/ia-map.png",
                        alt: "Information architecture before and after",
                    },
                ],
                slides: vec![
                    Block::Paragraph("Ordering: reorder in under a minute."),
                    Block::Paragraph("Compliance: checklists with photo evidence."),
                    Block::Paragraph("Payroll and promotions: one tap from home."),
                ],
            },
            Section {
                id: "impact",
                title: "Impact",
                blocks: vec![Block::Paragraph(
                    "Portal adoption hit 92% of franchisees within three months, and \
                     support calls to the franchise desk dropped by a third.",
                )],
                slides: vec![],
            },
        ],
    }
}

fn ibc_design_system() -> CaseStudy {
    CaseStudy {
        slug: "ibc-design-system",
        title: "IBC Design System",
        summary: "A component library and token set that outlived every project that \
                  funded it.",
        sections: vec![
            Section {
                id: "origin",
                title: "Origin",
                blocks: vec![Block::Paragraph(
                    "The system started as a side artifact of the franchise portal: a \
                     shared Figma library and a handful of coded components. Demand from \
                     other teams turned it into a funded platform.",
                )],
                slides: vec![],
            },
            Section {
                id: "tokens",
                title: "Tokens and theming",
                blocks: vec![
                    Block::Paragraph(
                        "Every color, radius, and spacing value lives in a three-tier \
                         token pyramid: primitives, semantic roles, component slots. \
                         Brand refreshes became a token swap instead of a repaint.",
                    ),
                    Block::Image {
                        src: "/images/ibc-ds/tokens.png",
                        alt: "Token pyramid diagram",
                    },
                ],
                slides: vec![],
            },
            Section {
                id: "governance",
                title: "Governance",
                blocks: vec![
                    Block::Paragraph(
                        "Contribution followed a lightweight RFC: propose in a shared \
                         channel, pair with a maintainer, ship behind a minor version. \
                         Nothing entered the library without two consuming teams.",
                    ),
                    Block::Quote {
                        text: "The system is a product, and its users are teams.",
                        attribution: "Design system charter",
                    },
                ],
                slides: vec![],
            },
            Section {
                id: "legacy",
                title: "Legacy",
                blocks: vec![Block::Paragraph(
                    "Four years on, the system ships in every IBC property and the token \
                     pyramid has survived two rebrands unchanged.",
                )],
                slides: vec![],
            },
        ],
    }
}
