/// Demonstration content inserted when the store is created.
use crate::models::{AspectRatio, MediaType, NewBlogPost, NewMediaItem, NewTimelineMilestone};

const RAPID_ITERATION: &[&str] = &[
    "In the world of startups, there's a common misconception that moving fast means being chaotic. But true velocity comes from establishing rhythm — a cadence of experimentation, learning, and iteration that feels almost musical.",
    "When I work with founders, I often use musical metaphors. A startup's early days are like a jazz improvisation: you have a core theme (your vision), a set of instruments (your team and resources), and the courage to riff on ideas without knowing exactly where they'll lead.",
    "> \"The fastest way forward isn't a straight line — it's a series of thoughtful pivots, each building on the last.\"",
    "Speed in startups isn't about doing everything at once. It's about finding your tempo: fast enough to learn quickly, slow enough to internalize those lessons. It's about creating feedback loops that sing — where every experiment teaches you something valuable, every failure is a note that sharpens the next attempt.",
    "At Yelo, we've learned that rapid iteration doesn't mean abandoning strategy. It means treating strategy as a living composition, constantly refined through real-world performance. Each customer conversation is a new verse. Each metric is a measure we analyze and adjust.",
    "The key is knowing when to accelerate and when to hold. When a hypothesis shows promise, lean in. When data suggests a different direction, pivot gracefully. And always, always keep the melody of your mission at the center of every decision.",
];

const DAYDREAMING: &[&str] = &[
    "There's a quiet paradox in modern productivity culture: we're obsessed with optimization, yet we've forgotten that some of our best thinking happens when we're not actively trying to think.",
    "I do my deepest strategic work on ski slopes, on climbing routes, or during long piano improvisations. Not because I'm avoiding work, but because these are the moments when my mind shifts from execution mode to exploration mode.",
    "Neuroscience backs this up. The default mode network — the brain's \"daydreaming\" circuit — is where we make unexpected connections, synthesize disparate ideas, and discover insights hiding in plain sight. It's the mental state where creativity doesn't just happen; it flourishes.",
    "> \"Strategic thinking isn't about grinding harder. It's about creating space for insights to find you.\"",
    "At Yale, my research often hit walls when I was staring at the screen for hours. But step away for a walk, let my mind wander through unrelated thoughts, and suddenly a connection would emerge — a pattern I'd been too focused to see.",
    "For founders and leaders, the lesson is clear: schedule white space. Protect time for unstructured thinking. Take walks without your phone. Play music. Ski. Climb. Let your subconscious do the heavy lifting.",
    "The best strategies aren't manufactured through sheer willpower. They're discovered in the interplay between intense focus and spacious wonder. They're the melodies that emerge when you're not forcing the composition — when you're simply listening to what wants to be played.",
];

pub fn demo_milestones() -> Vec<NewTimelineMilestone> {
    vec![
        NewTimelineMilestone {
            company: "Yelo".into(),
            role: "Growth & GTM Lead".into(),
            start_date: "2023".into(),
            end_date: None,
            impact: "Leading go-to-market strategy for VC-backed startup, driving user acquisition and market expansion initiatives".into(),
            insight: "Growth is a symphony — every channel, every experiment, every insight harmonizing toward product-market fit.".into(),
            logo_url: None,
            order: 0,
        },
        NewTimelineMilestone {
            company: "Stealth Founders Fund".into(),
            role: "Startup Coach".into(),
            start_date: "2022".into(),
            end_date: None,
            impact: "Advising early-stage founders on strategy, growth, and navigating uncertainty in the startup journey".into(),
            insight: "The best advice isn't prescriptive — it's helping founders discover their own unique melody.".into(),
            logo_url: None,
            order: 1,
        },
        NewTimelineMilestone {
            company: "Yale Law School".into(),
            role: "Researcher".into(),
            start_date: "2022".into(),
            end_date: Some("2023".into()),
            impact: "Conducting legal research exploring intersections of technology, policy, and innovation".into(),
            insight: "Law and innovation share a rhythm — both require balancing structure with the courage to question convention.".into(),
            logo_url: None,
            order: 2,
        },
        NewTimelineMilestone {
            company: "University of Notre Dame".into(),
            role: "Student - Economics & Applied Math".into(),
            start_date: "2018".into(),
            end_date: Some("2022".into()),
            impact: "Graduated with dual major in Economics and Applied Computational Mathematics, developing analytical and quantitative skills".into(),
            insight: "Education taught me that the most valuable skill is learning how to learn — improvising with knowledge.".into(),
            logo_url: None,
            order: 3,
        },
    ]
}

pub fn demo_blog_posts() -> Vec<NewBlogPost> {
    vec![
        NewBlogPost {
            title: "The Rhythm of Rapid Iteration".into(),
            excerpt: "In startups, speed isn't reckless — it's a deliberate tempo that keeps you ahead of stagnation. Here's how to move fast without breaking your foundation.".into(),
            content: RAPID_ITERATION.join("\n\n"),
            tempo: "Fast".into(),
            tempo_value: 140,
            image_url: None,
            read_time: 5,
            published_at: "2024-10-15T00:00:00.000Z".into(),
        },
        NewBlogPost {
            title: "On Daydreaming as Strategic Practice".into(),
            excerpt: "The most innovative ideas don't come from forcing creativity — they emerge in moments of spacious wonder. A meditation on the power of letting your mind wander.".into(),
            content: DAYDREAMING.join("\n\n"),
            tempo: "Adagio".into(),
            tempo_value: 60,
            image_url: None,
            read_time: 6,
            published_at: "2024-09-22T00:00:00.000Z".into(),
        },
    ]
}

pub fn demo_media_items() -> Vec<NewMediaItem> {
    vec![
        NewMediaItem {
            title: "Curiosity in C Major".into(),
            description: Some(
                "A playlist for deep work and strategic thinking — clear, focused, uplifting".into(),
            ),
            media_type: MediaType::Playlist,
            url: "https://open.spotify.com/playlist/example1".into(),
            musical_key: Some("E Major".into()),
            mood: Some("Curiosity".into()),
            thumbnail_url: None,
            aspect_ratio: Some(AspectRatio::Square),
        },
        NewMediaItem {
            title: "Late Night Contemplations".into(),
            description: Some(
                "For the quiet hours when the best ideas emerge from stillness".into(),
            ),
            media_type: MediaType::Playlist,
            url: "https://open.spotify.com/playlist/example2".into(),
            musical_key: Some("F Minor".into()),
            mood: Some("Reflection".into()),
            thumbnail_url: None,
            aspect_ratio: Some(AspectRatio::Square),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blog_content_keeps_paragraph_and_quote_markers() {
        let posts = demo_blog_posts();
        let paragraphs: Vec<&str> = posts[0].content.split("\n\n").collect();
        assert_eq!(paragraphs.len(), RAPID_ITERATION.len());
        assert!(paragraphs[2].starts_with("> "));
    }

    #[test]
    fn milestone_orders_are_distinct() {
        let orders: Vec<i32> = demo_milestones().iter().map(|m| m.order).collect();
        assert_eq!(orders, vec![0, 1, 2, 3]);
    }
}
