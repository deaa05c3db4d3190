use std::fmt;

use chrono::NaiveDate;
use color_eyre::eyre::{ensure, eyre, Result};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::Deserialize;

const COURSES_JSON: &str = include_str!("../content/courses.json");
const SYLLABUS_JSON: &str = include_str!("../content/syllabus.json");
const QUIZZES_JSON: &str = include_str!("../content/quizzes.json");
const TESTIMONIALS_JSON: &str = include_str!("../content/testimonials.json");
const FAQS_JSON: &str = include_str!("../content/faqs.json");
const BLOG_TOPICS_JSON: &str = include_str!("../content/blog_topics.json");

/// Course levels in ascending difficulty order. Exactly one course exists
/// per level.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Deserialize)]
pub enum Level {
    L1,
    L2,
    L3,
    L4,
}

impl Level {
    pub const ALL: [Level; 4] = [Level::L1, Level::L2, Level::L3, Level::L4];

    pub fn as_str(self) -> &'static str {
        match self {
            Level::L1 => "L1",
            Level::L2 => "L2",
            Level::L3 => "L3",
            Level::L4 => "L4",
        }
    }

    pub fn parse(s: &str) -> Option<Level> {
        match s {
            "L1" => Some(Level::L1),
            "L2" => Some(Level::L2),
            "L3" => Some(Level::L3),
            "L4" => Some(Level::L4),
            _ => None,
        }
    }

    /// The next level up, or `None` at the top tier.
    pub fn next(self) -> Option<Level> {
        match self {
            Level::L1 => Some(Level::L2),
            Level::L2 => Some(Level::L3),
            Level::L3 => Some(Level::L4),
            Level::L4 => None,
        }
    }

    pub fn tier(self) -> Tier {
        match self {
            Level::L1 => Tier::Beginner,
            Level::L2 => Tier::Intermediate,
            Level::L3 => Tier::Advanced,
            Level::L4 => Tier::Expert,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Level::L1 => "Foundation",
            Level::L2 => "Intermediate",
            Level::L3 => "Advanced",
            Level::L4 => "Expert",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Syllabus difficulty tiers. The derived `Ord` follows declaration order,
/// which is the cumulative-inclusion order (Beginner < ... < Expert).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Deserialize)]
pub enum Tier {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Tier {
    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Beginner => "Beginner",
            Tier::Intermediate => "Intermediate",
            Tier::Advanced => "Advanced",
            Tier::Expert => "Expert",
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub level: Level,
    pub title: String,
    pub price: u32,
    pub description: String,
    pub duration: String,
    pub target_audience: String,
    pub skills: Vec<String>,
    pub features: Vec<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SyllabusTopic {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub tier: Tier,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub id: u32,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_option: usize,
}

#[derive(Clone, Debug, Deserialize)]
pub struct QuizBank {
    pub level: Level,
    pub questions: Vec<QuizQuestion>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Testimonial {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub company: String,
    pub content: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

#[derive(Clone, Debug, Deserialize)]
struct BlogTopic {
    title: String,
    category: String,
    level: Level,
}

#[derive(Clone, Debug)]
pub struct BlogPost {
    pub id: u32,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub published: NaiveDate,
    pub read_time: String,
    pub category: String,
    pub tags: Vec<String>,
    pub level: Level,
}

/// The immutable content catalog, loaded once at startup from the JSON
/// tables embedded under `content/`.
pub struct Catalog {
    pub courses: Vec<Course>,
    pub syllabus: Vec<SyllabusTopic>,
    pub quizzes: Vec<QuizBank>,
    pub testimonials: Vec<Testimonial>,
    pub faqs: Vec<FaqItem>,
    pub posts: Vec<BlogPost>,
}

impl Catalog {
    pub fn load() -> Result<Catalog> {
        let courses: Vec<Course> = serde_json::from_str(COURSES_JSON)?;
        let syllabus: Vec<SyllabusTopic> = serde_json::from_str(SYLLABUS_JSON)?;
        let quizzes: Vec<QuizBank> = serde_json::from_str(QUIZZES_JSON)?;
        let testimonials: Vec<Testimonial> = serde_json::from_str(TESTIMONIALS_JSON)?;
        let faqs: Vec<FaqItem> = serde_json::from_str(FAQS_JSON)?;
        let topics: Vec<BlogTopic> = serde_json::from_str(BLOG_TOPICS_JSON)?;

        let catalog = Catalog {
            courses,
            syllabus,
            quizzes,
            testimonials,
            faqs,
            posts: build_posts(topics)?,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn course(&self, level: Level) -> Option<&Course> {
        self.courses.iter().find(|c| c.level == level)
    }

    pub fn course_by_id(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    pub fn quiz_bank(&self, level: Level) -> Option<&QuizBank> {
        self.quizzes.iter().find(|b| b.level == level)
    }

    /// Questions for a level. An absent bank yields an empty slice, which
    /// the quiz machine treats as an immediately completable session.
    pub fn questions(&self, level: Level) -> &[QuizQuestion] {
        self.quiz_bank(level)
            .map(|b| b.questions.as_slice())
            .unwrap_or(&[])
    }

    pub fn post(&self, id: u32) -> Option<&BlogPost> {
        self.posts.iter().find(|p| p.id == id)
    }

    fn validate(&self) -> Result<()> {
        for level in Level::ALL {
            let count = self.courses.iter().filter(|c| c.level == level).count();
            ensure!(count == 1, "expected exactly one {level} course, found {count}");
            let banks = self.quizzes.iter().filter(|b| b.level == level).count();
            ensure!(banks <= 1, "duplicate quiz bank for {level}");
        }

        for course in &self.courses {
            ensure!(course.price > 0, "course {} has a zero price", course.id);
        }

        for (i, topic) in self.syllabus.iter().enumerate() {
            ensure!(
                !self.syllabus[..i].iter().any(|t| t.id == topic.id),
                "duplicate syllabus topic id {}",
                topic.id
            );
        }

        for bank in &self.quizzes {
            for q in &bank.questions {
                ensure!(
                    q.options.len() == 4,
                    "question {} in {} bank has {} options",
                    q.id,
                    bank.level,
                    q.options.len()
                );
                ensure!(
                    q.correct_option < q.options.len(),
                    "question {} in {} bank has an out-of-range answer",
                    q.id,
                    bank.level
                );
            }
        }

        // Post ids are assigned ascending by publish date; re-check the
        // monotonic id/date pairing in case the generation changes.
        for (i, pair) in self.posts.windows(2).enumerate() {
            ensure!(
                pair[0].id < pair[1].id && pair[0].published <= pair[1].published,
                "blog posts out of id/date order at index {i}"
            );
        }

        Ok(())
    }
}

// Seed for the synthetic publish dates. Fixed so the catalog (and the
// id/date pairing) is identical across builds and restarts.
const BLOG_DATE_SEED: u64 = 0x70674d61737465;

fn build_posts(topics: Vec<BlogTopic>) -> Result<Vec<BlogPost>> {
    let newest = NaiveDate::from_ymd_opt(2026, 7, 31).ok_or_else(|| eyre!("bad anchor date"))?;
    let mut rng = StdRng::seed_from_u64(BLOG_DATE_SEED);

    let mut drafts: Vec<(NaiveDate, String, BlogTopic)> = topics
        .into_iter()
        .map(|topic| {
            let published = newest - chrono::Days::new(rng.gen_range(0..1095));
            let read_time = format!("{} min read", rng.gen_range(5..15));
            (published, read_time, topic)
        })
        .collect();

    // Oldest first, so id 1 is the oldest post and id N the newest.
    drafts.sort_by_key(|(published, _, _)| *published);

    Ok(drafts
        .into_iter()
        .enumerate()
        .map(|(idx, (published, read_time, topic))| BlogPost {
            id: idx as u32 + 1,
            excerpt: format!(
                "Learn everything about {}. A comprehensive guide for {} engineers.",
                topic.title, topic.level
            ),
            content: post_content(&topic),
            author: "Karthik Katrotiya".to_string(),
            published,
            read_time,
            tags: vec![
                "PostgreSQL".to_string(),
                topic.category.clone(),
                "Database".to_string(),
            ],
            title: topic.title,
            category: topic.category,
            level: topic.level,
        })
        .collect())
}

fn post_content(topic: &BlogTopic) -> String {
    if topic.title == "PostgreSQL vs MySQL: An Architectural View" {
        return COMPARISON_POST.to_string();
    }

    format!(
        "<p>This is a detailed article about {title}. In this post, we cover the fundamentals \
         and deep dive into the specifics of {category}.</p>\n\
         <p>PostgreSQL continues to be the most advanced open source database. Understanding \
         {title} is crucial for any DBA.</p>\n\
         <h3>Key Concepts</h3>\n\
         <ul>\n\
         <li>Concept 1: Core functionality</li>\n\
         <li>Concept 2: Performance implications</li>\n\
         <li>Concept 3: Best practices</li>\n\
         </ul>",
        title = topic.title,
        category = topic.category.to_lowercase(),
    )
}

const COMPARISON_POST: &str = "\
<p>Choosing between PostgreSQL and MySQL is a common dilemma. Here is a detailed architectural comparison.</p>\n\
<table>\n\
<thead><tr><th>Feature</th><th>PostgreSQL</th><th>MySQL</th></tr></thead>\n\
<tbody>\n\
<tr><td><strong>Architecture</strong></td><td>Process-based (Robust, isolate crashes)</td><td>Thread-based (Lightweight context switch)</td></tr>\n\
<tr><td><strong>Join Algorithms</strong></td><td>Nested Loop, Hash Join, Merge Join</td><td>Nested Loop, Hash Join (Newer versions)</td></tr>\n\
<tr><td><strong>License</strong></td><td>PostgreSQL License (Very permissive)</td><td>GPL (More restrictive)</td></tr>\n\
<tr><td><strong>Replication</strong></td><td>Streaming (Physical) &amp; Logical</td><td>Binlog (Logical)</td></tr>\n\
<tr><td><strong>Concurrency</strong></td><td>MVCC with no Read Locks</td><td>MVCC (InnoDB) with Undo Logs</td></tr>\n\
</tbody>\n\
</table>\n\
<p>While MySQL is excellent for web workloads, PostgreSQL shines in complex queries, data integrity, and extensibility.</p>";
