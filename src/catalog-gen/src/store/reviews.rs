use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::error::CatalogGenError;
use crate::error::Result;
use crate::store::personas::PersonaProvider;
use crate::store::personas::Reviewer;
use crate::store::ratings::RatingSampler;
use crate::store::ratings::ReviewCountSampler;

pub const MAX_REVIEW_CHARS: usize = 100_000;
pub const REVIEW_DATE_FORMAT: &str = "%Y-%m-%d %I:%M:%S %p";

/// One generated review. Field order is the output column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Review {
    pub review_id: i64,
    pub product_id: i64,
    pub product_name: String,
    pub product_category: String,
    pub rating: i64,
    pub review_text: String,
    pub reviewer_name: String,
    pub reviewer_persona: &'static str,
    pub reviewer_age: i64,
    pub reviewer_location: &'static str,
    pub review_date: String,
}

struct Tier {
    openers: [&'static str; 3],
    middles: [&'static str; 3],
    closers: [&'static str; 3],
}

static TIERS: [Tier; 5] = [
    Tier {
        openers: [
            "Terrible experience with",
            "I regret buying",
            "Completely unsatisfied with",
        ],
        middles: [
            "It broke after a few uses and support did nothing.",
            "The build felt cheap and failed.",
            "Multiple defects and poor reliability.",
        ],
        closers: [
            "Would not recommend.",
            "Save your money.",
            "I returned it and asked for a refund.",
        ],
    },
    Tier {
        openers: [
            "Disappointing overall for",
            "Not what I expected from",
            "Mixed feelings about",
        ],
        middles: [
            "Works sometimes but has flaws.",
            "Some features are fine but execution lacks.",
            "Disappointing quality in several places.",
        ],
        closers: [
            "There are better options.",
            "I probably won't buy again.",
            "Needs improvement.",
        ],
    },
    Tier {
        openers: ["It's okay for", "Average experience with", "Works as expected for"],
        middles: [
            "It does the job but doesn't excel.",
            "Reasonable quality at this price.",
            "Has pros and cons.",
        ],
        closers: [
            "A decent neutral pick.",
            "Satisfactory if you need something simple.",
            "Not exceptional but usable.",
        ],
    },
    Tier {
        openers: ["Pretty pleased with", "Good value in", "Solid performance for"],
        middles: [
            "Performs reliably and feels well constructed.",
            "Met expectations and pleasant to use.",
            "A few small issues, but overall positive.",
        ],
        closers: ["Would recommend.", "Good buy.", "I'd purchase again."],
    },
    Tier {
        openers: [
            "Absolutely love",
            "Fantastic product:",
            "Exceeded expectations with",
        ],
        middles: [
            "Top-tier quality and attention to detail.",
            "Performs flawlessly and is a joy to use.",
            "Everything feels premium and reliable.",
        ],
        closers: ["Highly recommended!", "Five stars.", "Worth every penny."],
    },
];

const POSITIVE_EXTRAS: [&str; 3] = [
    "It consistently performs well in daily use.",
    "Setup was straightforward and painless.",
    "Materials and fit/finish are impressive for the price.",
];

const NEUTRAL_EXTRAS: [&str; 3] = [
    "It's serviceable for common tasks but not outstanding.",
    "It does what it needs to, but don't expect surprises.",
    "Good for occasional use or budget setups.",
];

const NEGATIVE_EXTRAS: [&str; 3] = [
    "It caused repeated issues during normal use.",
    "Support and documentation were inadequate.",
    "I encountered multiple defects and usability problems.",
];

fn pick<R: Rng>(rng: &mut R, values: &'static [&'static str]) -> &'static str {
    values.choose(rng).copied().unwrap_or_default()
}

/// Cuts `text` to at most `max_chars` characters.
pub fn truncate(mut text: String, max_chars: usize) -> String {
    if let Some((idx, _)) = text.char_indices().nth(max_chars) {
        text.truncate(idx);
    }
    text
}

/// Builds the review body for a 1..=5 star `rating`. Sentences are joined by
/// single spaces.
pub fn make_review_text<R: Rng>(
    rng: &mut R,
    rating: u8,
    product_name: &str,
    product_category: &str,
    reviewer: &Reviewer,
) -> String {
    let tier = &TIERS[(rating.clamp(1, 5) - 1) as usize];
    let opener = pick(rng, &tier.openers);
    let middle = pick(rng, &tier.middles);
    let closer = pick(rng, &tier.closers);
    let extra = match rating {
        4.. => pick(rng, &POSITIVE_EXTRAS),
        3 => pick(rng, &NEUTRAL_EXTRAS),
        _ => pick(rng, &NEGATIVE_EXTRAS),
    };

    let text = format!(
        "{opener} {product_name}. {}{middle} In the {product_category} category, this product. {extra} {closer} - {}, {}, {}",
        reviewer.focus.lead_in(),
        reviewer.name,
        reviewer.persona,
        reviewer.location,
    );

    truncate(text, MAX_REVIEW_CHARS)
}

/// Uniform whole-second timestamps in `[to - years_back * 365 days, to]`.
pub struct ReviewDateSampler {
    from: DateTime<Utc>,
    window_secs: i64,
}

impl ReviewDateSampler {
    pub fn try_new(to: DateTime<Utc>, years_back: u32) -> Result<Self> {
        let window = Duration::try_days(365 * years_back as i64).ok_or_else(|| {
            CatalogGenError::InvalidConfig(format!("years back {years_back} is out of range"))
        })?;
        let from = to.checked_sub_signed(window).ok_or_else(|| {
            CatalogGenError::InvalidConfig(format!("years back {years_back} is out of range"))
        })?;

        Ok(Self {
            from,
            window_secs: window.num_seconds(),
        })
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.from
    }

    pub fn window(&self) -> Duration {
        Duration::seconds(self.window_secs)
    }

    pub fn sample_datetime<R: Rng>(&self, rng: &mut R) -> DateTime<Utc> {
        self.from + Duration::seconds(rng.gen_range(0..=self.window_secs))
    }

    pub fn sample<R: Rng>(&self, rng: &mut R) -> String {
        self.sample_datetime(rng)
            .format(REVIEW_DATE_FORMAT)
            .to_string()
    }
}

/// Draws all reviews of a run. Owns the review id counter.
pub struct ReviewGenerator {
    personas: PersonaProvider,
    ratings: RatingSampler,
    counts: ReviewCountSampler,
    dates: ReviewDateSampler,
    next_review_id: i64,
}

impl ReviewGenerator {
    pub fn new(counts: ReviewCountSampler, dates: ReviewDateSampler) -> Result<Self> {
        Ok(Self {
            personas: PersonaProvider::default(),
            ratings: RatingSampler::try_new()?,
            counts,
            dates,
            next_review_id: 1,
        })
    }

    pub fn dates(&self) -> &ReviewDateSampler {
        &self.dates
    }

    /// Number of reviews emitted so far.
    pub fn emitted(&self) -> i64 {
        self.next_review_id - 1
    }

    /// Appends zero or more reviews of one product to `out`. `category` must
    /// already be coerced onto the bias table.
    pub fn generate<R: Rng>(
        &mut self,
        rng: &mut R,
        product_id: i64,
        product_name: &str,
        category: &str,
        out: &mut Vec<Review>,
    ) {
        let n = self.counts.sample(rng);
        for _ in 0..n {
            let reviewer = self.personas.sample(rng);
            let rating = self.ratings.sample(rng, category);
            let review_text = make_review_text(rng, rating, product_name, category, &reviewer);
            let review_date = self.dates.sample(rng);

            out.push(Review {
                review_id: self.next_review_id,
                product_id,
                product_name: product_name.to_string(),
                product_category: category.to_string(),
                rating: rating as i64,
                review_text,
                reviewer_name: reviewer.name,
                reviewer_persona: reviewer.persona,
                reviewer_age: reviewer.age as i64,
                reviewer_location: reviewer.location,
                review_date,
            });
            self.next_review_id += 1;
        }
    }
}
