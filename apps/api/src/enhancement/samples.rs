// Canned inputs served by GET /api/examples so the UI can offer one-click demos.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SampleInput {
    pub id: &'static str,
    pub title: &'static str,
    #[serde(rename = "type")]
    pub content_type: &'static str,
    pub text: &'static str,
}

pub const SAMPLE_INPUTS: &[SampleInput] = &[
    SampleInput {
        id: "junior-developer",
        title: "Junior developer",
        content_type: "resume",
        text: "I am a developer who knows Python. I made some websites for local businesses. \
            I helped my team fix bugs and I learned a lot of new things.",
    },
    SampleInput {
        id: "retail-manager",
        title: "Retail shift manager",
        content_type: "resume",
        text: "I was in charge of a store with 12 people. I did the schedules and inventory. \
            I'm a people person and a hard worker who got good reviews from customers.",
    },
    SampleInput {
        id: "designer-bio",
        title: "Designer bio",
        content_type: "bio",
        text: "My name is Sam and I like making nice things. I worked on branding for some startups. \
            I'm a fast learner and a team player who loves great typography!",
    },
    SampleInput {
        id: "data-analyst",
        title: "Data analyst",
        content_type: "resume",
        text: "I worked with sales data every week. I made dashboards in Tableau that people really liked. \
            I can write SQL and I tried to automate reports.",
    },
];
