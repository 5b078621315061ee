//! Canned operations assistant. Replies are picked by keyword; nothing is
//! generated and no store is consulted.

use serde::Serialize;

const URGENT_REPLY: &str = "Urgent Donations Analysis:\n\n\
• Mario's Restaurant - 50 prepared meals (expires in 1.5 hours)\n\
• Corporate Cafeteria - 40 lunch meals (expires in 1 hour)\n\
• Grand Bakery - 30 pastries (expires in 2 hours)\n\n\
Recommended Action: Dispatch volunteers to Corporate Cafeteria first (closest & most urgent), \
then Mario's, then Grand Bakery. Estimated total pickup time: 45 minutes.";

const ROUTE_REPLY: &str = "Optimized Pickup Routes:\n\n\
Route A (High Priority):\n\
1. Corporate Cafeteria (5 min)\n\
2. Mario's Restaurant (8 min)\n\
3. Fresh Market (12 min)\n\
Total time: 25 minutes\n\n\
Route B (Standard):\n\
1. Grand Bakery (15 min)\n\
2. Event Hall (10 min)\n\
3. School Cafeteria (18 min)\n\
Total time: 43 minutes\n\n\
Saving 35% travel time vs. individual trips!";

const TREND_REPLY: &str = "Weekly Trends Analysis:\n\n\
• Peak donation time: 2-4 PM (lunch surplus)\n\
• Highest volume day: Friday (35% more donations)\n\
• Most common type: Prepared meals (45%)\n\
• Average response time: 23 minutes\n\n\
Tomorrow's Prediction: Expected 28 donations (based on historical patterns). \
Recommend having 6 volunteers available during peak hours.";

const REPORT_REPLY: &str = "Monthly Impact Report Generated:\n\n\
• Total meals rescued: 3,247\n\
• CO2 emissions saved: 1,623 kg\n\
• Families served: 892\n\
• Partner organizations: 67\n\
• Volunteer hours: 1,445\n\n\
Key Achievements: 23% increase in donations, 87% collection success rate. \
Full report has been generated and is ready for stakeholder review.";

const HELP_REPLY: &str = "I can help you with donation prioritization, route optimization, \
trend analysis, and report generation. What specific task would you like assistance with?";

pub const GREETING: &str = "Hello! I'm your assistant. I can help you with donation \
prioritization, route optimization, and generating insights. What would you like me to help \
you with today?";

/// First matching topic wins, so "urgent pickup report" gets the urgent reply.
const TOPICS: [(&[&str], &str); 4] = [
    (&["urgent", "priority"], URGENT_REPLY),
    (&["route", "pickup"], ROUTE_REPLY),
    (&["trend", "analysis"], TREND_REPLY),
    (&["report", "impact"], REPORT_REPLY),
];

pub fn reply(message: &str) -> &'static str {
    let message = message.to_lowercase();

    TOPICS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| message.contains(k)))
        .map(|(_, reply)| *reply)
        .unwrap_or(HELP_REPLY)
}

#[derive(Debug, Clone, Serialize)]
pub struct Suggestion {
    pub title: &'static str,
    pub description: &'static str,
    pub prompt: &'static str,
}

pub const SUGGESTIONS: [Suggestion; 4] = [
    Suggestion {
        title: "Urgent Donation Priority",
        description: "High-priority donations that need immediate attention",
        prompt: "Show me urgent donations that expire in the next 2 hours",
    },
    Suggestion {
        title: "Optimize Collection Routes",
        description: "Generate efficient pickup routes for today",
        prompt: "Create optimized pickup routes for all pending donations",
    },
    Suggestion {
        title: "Weekly Trends Analysis",
        description: "Analyze donation patterns and predict peak times",
        prompt: "Analyze this week's donation trends and predict tomorrow's volumes",
    },
    Suggestion {
        title: "Generate Impact Report",
        description: "Create summary for funders",
        prompt: "Generate monthly impact report for stakeholders",
    },
];

#[cfg(test)]
mod tests {
    use super::{HELP_REPLY, REPORT_REPLY, ROUTE_REPLY, SUGGESTIONS, URGENT_REPLY, reply};

    #[test]
    fn keywords_pick_the_reply_case_insensitively() {
        assert_eq!(reply("What is TOP PRIORITY?"), URGENT_REPLY);
        assert_eq!(reply("plan a route"), ROUTE_REPLY);
        assert_eq!(reply("Impact numbers please"), REPORT_REPLY);
        assert_eq!(reply("hello"), HELP_REPLY);
    }

    #[test]
    fn earlier_topics_win() {
        assert_eq!(reply("urgent pickup report"), URGENT_REPLY);
    }

    #[test]
    fn every_suggestion_has_a_dedicated_reply() {
        for suggestion in SUGGESTIONS {
            assert_ne!(reply(suggestion.prompt), HELP_REPLY, "{}", suggestion.title);
        }
    }
}
