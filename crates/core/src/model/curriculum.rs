//! Authored lesson content for the 30-day program.
//!
//! Only the milestone days are fully written; every other day resolves to a
//! "coming soon" placeholder so callers never have to handle a missing day.

/// One instructional step inside a day's lesson.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayStep {
    pub title: String,
    pub body: String,
    pub examples: Vec<String>,
}

impl DayStep {
    #[must_use]
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            examples: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_examples(mut self, examples: Vec<String>) -> Self {
        self.examples = examples;
        self
    }
}

/// Full lesson content for one day of the program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayContent {
    pub day_number: u32,
    pub title: String,
    pub goal: String,
    pub deliverable: String,
    pub tools: Vec<String>,
    pub steps: Vec<DayStep>,
    pub completion: String,
    pub milestones: Vec<String>,
    pub major_milestone: bool,
}

/// Looks up the lesson for a day, falling back to placeholder content for
/// days that have not been authored yet.
#[must_use]
pub fn day_content(day: u32) -> DayContent {
    match day {
        1 => first_swipe_file(),
        15 => DayContent {
            day_number: 15,
            title: "Scale to Multiple Products".into(),
            goal: "Diversify your income streams".into(),
            deliverable: "Product line expansion".into(),
            tools: Vec::new(),
            steps: Vec::new(),
            completion: "Multiple revenue streams active!".into(),
            milestones: vec![
                "3+ products launched".into(),
                "Automated sales funnel".into(),
                "Recurring revenue setup".into(),
            ],
            major_milestone: true,
        },
        20 => DayContent {
            day_number: 20,
            title: "Build Your Brand".into(),
            goal: "Establish authority in your niche".into(),
            deliverable: "Complete brand identity".into(),
            tools: Vec::new(),
            steps: Vec::new(),
            completion: "Brand established!".into(),
            milestones: vec![
                "Professional brand identity".into(),
                "Growing audience".into(),
                "Content strategy active".into(),
            ],
            major_milestone: true,
        },
        25 => DayContent {
            day_number: 25,
            title: "Automation & Systems".into(),
            goal: "Work smarter, not harder".into(),
            deliverable: "Automated business systems".into(),
            tools: Vec::new(),
            steps: Vec::new(),
            completion: "Business running on autopilot!".into(),
            milestones: vec![
                "Email automation live".into(),
                "Payment processing automated".into(),
                "Customer service streamlined".into(),
            ],
            major_milestone: true,
        },
        30 => DayContent {
            day_number: 30,
            title: "Scale to $500K+ Goal".into(),
            goal: "Plan your path to serious revenue".into(),
            deliverable: "Your scaling strategy".into(),
            tools: Vec::new(),
            steps: Vec::new(),
            completion: "Ready to scale big!".into(),
            milestones: vec![
                "Proven business model".into(),
                "Scalable systems in place".into(),
                "$500K roadmap created".into(),
            ],
            major_milestone: true,
        },
        other => placeholder(other),
    }
}

fn first_swipe_file() -> DayContent {
    DayContent {
        day_number: 1,
        title: "Make Your First Swipe File".into(),
        goal: "Create something cool people can buy — a list of fun hook ideas that help them post better stuff online.".into(),
        deliverable: "A swipe file: 50 short, scroll-stopping captions people can copy and use on TikTok or Instagram.".into(),
        tools: vec![
            "ChatGPT (to write your list)".into(),
            "Canva (to make it look good)".into(),
            "Gumroad (to sell it)".into(),
        ],
        steps: vec![
            DayStep::new(
                "Ask ChatGPT for help",
                "Ask for 50 hook ideas for Instagram or TikTok Reels, fun and catchy, aimed at creators in fashion, food, or tech.",
            ),
            DayStep::new(
                "Pick Your Favorite 40-50",
                "Copy the ones you love most into a Google Doc or Canva file.",
            )
            .with_examples(vec![
                "You won't believe what this AI just did...".into(),
                "This meal cost $3 but tastes like $30".into(),
                "What I wear when I want to feel like a CEO".into(),
            ]),
            DayStep::new(
                "Make it Look Nice",
                "Lay the list out in Canva with bold fonts and themed sections, and put your handle on the last page.",
            ),
            DayStep::new(
                "Save It",
                "Download as PDF and give it a name that sells, like \"50 Hooks That Make People Stop Scrolling\".",
            ),
            DayStep::new(
                "Upload to Gumroad",
                "Create a Gumroad product, upload your PDF, and price it at $17 or pay-what-you-want.",
            ),
        ],
        completion: "DONE! That's your first digital product. You made a thing. It can make you money.".into(),
        milestones: vec![
            "First digital product created".into(),
            "Set up Gumroad store".into(),
            "Ready to make sales".into(),
        ],
        major_milestone: true,
    }
}

fn placeholder(day: u32) -> DayContent {
    DayContent {
        day_number: day,
        title: format!("Day {day} Coming Soon"),
        goal: "Stay tuned for this lesson!".into(),
        deliverable: "More exciting content coming soon.".into(),
        tools: Vec::new(),
        steps: Vec::new(),
        completion: "Check back later!".into(),
        milestones: Vec::new(),
        major_milestone: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_one_is_fully_authored() {
        let content = day_content(1);
        assert_eq!(content.day_number, 1);
        assert_eq!(content.title, "Make Your First Swipe File");
        assert_eq!(content.steps.len(), 5);
        assert!(content.major_milestone);
    }

    #[test]
    fn milestone_days_are_flagged() {
        for day in [15, 20, 25, 30] {
            assert!(day_content(day).major_milestone, "day {day}");
            assert!(!day_content(day).milestones.is_empty(), "day {day}");
        }
    }

    #[test]
    fn unauthored_days_fall_back_to_placeholder() {
        let content = day_content(7);
        assert_eq!(content.day_number, 7);
        assert_eq!(content.title, "Day 7 Coming Soon");
        assert!(content.steps.is_empty());
        assert!(!content.major_milestone);
    }
}
