//! Sample directory and success-story records loaded into empty stores.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use sqlx::types::Json;
use uuid::Uuid;

use crate::models::{Campaign, Creator};

struct SeedCreator {
    name: &'static str,
    bio: &'static str,
    location: &'static str,
    category: &'static str,
    platforms: &'static [&'static str],
    followers: i64,
    engagement_rate: f64,
}

struct SeedCampaign {
    brand_name: &'static str,
    title: &'static str,
    description: &'static str,
    budget_dollars: i64,
    platform: &'static str,
    category: &'static str,
    metrics: &'static [(&'static str, &'static str)],
    testimonial: Option<&'static str>,
    client_name: Option<&'static str>,
    client_role: Option<&'static str>,
    rating: Option<i16>,
}

const CREATORS: &[SeedCreator] = &[
    SeedCreator {
        name: "Sofia Marquez",
        bio: "Clean beauty routines and honest product reviews.",
        location: "Los Angeles, CA",
        category: "Beauty",
        platforms: &["Instagram", "TikTok"],
        followers: 248_000,
        engagement_rate: 5.4,
    },
    SeedCreator {
        name: "Jalen Brooks",
        bio: "Home workouts, meal prep and marathon training logs.",
        location: "Atlanta, GA",
        category: "Fitness",
        platforms: &["YouTube", "Instagram"],
        followers: 512_000,
        engagement_rate: 4.1,
    },
    SeedCreator {
        name: "Priya Natarajan",
        bio: "Budget travel guides across South and Southeast Asia.",
        location: "Bengaluru, India",
        category: "Travel",
        platforms: &["Instagram", "YouTube"],
        followers: 87_500,
        engagement_rate: 6.8,
    },
    SeedCreator {
        name: "Theo Lindqvist",
        bio: "Minimal desk setups and the gadgets that earn a place on them.",
        location: "Stockholm, Sweden",
        category: "Tech",
        platforms: &["YouTube", "TikTok"],
        followers: 1_320_000,
        engagement_rate: 3.2,
    },
    SeedCreator {
        name: "Amara Okafor",
        bio: "West African home cooking in under thirty minutes.",
        location: "Lagos, Nigeria",
        category: "Food",
        platforms: &["TikTok", "Instagram"],
        followers: 634_000,
        engagement_rate: 7.3,
    },
    SeedCreator {
        name: "Noah Kim",
        bio: "Streetwear drops, thrift flips and styling breakdowns.",
        location: "Seoul, South Korea",
        category: "Fashion",
        platforms: &["Instagram", "TikTok", "YouTube"],
        followers: 156_000,
        engagement_rate: 5.9,
    },
];

const CAMPAIGNS: &[SeedCampaign] = &[
    SeedCampaign {
        brand_name: "Lumen Skincare",
        title: "Summer Glow Launch",
        description: "Twelve beauty creators introduced a mineral SPF line with tutorial-style reels.",
        budget_dollars: 45_000,
        platform: "Instagram",
        category: "Beauty",
        metrics: &[("reach", "3.1M"), ("engagement", "6.2%"), ("sales lift", "38%")],
        testimonial: Some("The creators felt like part of our team from day one."),
        client_name: Some("Dana Whitfield"),
        client_role: Some("Head of Growth, Lumen Skincare"),
        rating: Some(5),
    },
    SeedCampaign {
        brand_name: "Stride Athletics",
        title: "30-Day Run Challenge",
        description: "Fitness creators led a month-long challenge built around the new trail shoe.",
        budget_dollars: 80_000,
        platform: "YouTube",
        category: "Fitness",
        metrics: &[("views", "5.4M"), ("signups", "42K"), ("roas", "4.6x")],
        testimonial: Some("Best-performing launch we've run outside paid search."),
        client_name: Some("Marcus Reyes"),
        client_role: Some("Brand Director, Stride Athletics"),
        rating: Some(5),
    },
    SeedCampaign {
        brand_name: "Nomad Rail",
        title: "Slow Travel Stories",
        description: "Travel creators documented overnight rail routes across three countries.",
        budget_dollars: 30_000,
        platform: "TikTok",
        category: "Travel",
        metrics: &[("views", "2.2M"), ("bookings", "+21%")],
        testimonial: None,
        client_name: None,
        client_role: None,
        rating: Some(4),
    },
];

fn seed_base_time() -> DateTime<Utc> {
    Utc::now() - Duration::days(30)
}

pub fn creators() -> Vec<Creator> {
    let base = seed_base_time();
    CREATORS
        .iter()
        .enumerate()
        .map(|(i, c)| Creator {
            id: Uuid::new_v4(),
            name: c.name.to_string(),
            bio: c.bio.to_string(),
            location: c.location.to_string(),
            category: c.category.to_string(),
            platforms: c.platforms.iter().map(|p| p.to_string()).collect(),
            followers: c.followers,
            engagement_rate: c.engagement_rate,
            created_at: base + Duration::seconds(i as i64),
        })
        .collect()
}

pub fn campaigns() -> Vec<Campaign> {
    let base = seed_base_time();
    CAMPAIGNS
        .iter()
        .enumerate()
        .map(|(i, c)| Campaign {
            id: Uuid::new_v4(),
            brand_name: c.brand_name.to_string(),
            title: c.title.to_string(),
            description: c.description.to_string(),
            budget: Decimal::new(c.budget_dollars, 0),
            platform: c.platform.to_string(),
            category: c.category.to_string(),
            metrics: Json(
                c.metrics
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect::<BTreeMap<_, _>>(),
            ),
            testimonial: c.testimonial.map(str::to_string),
            client_name: c.client_name.map(str::to_string),
            client_role: c.client_role.map(str::to_string),
            rating: c.rating,
            created_at: base + Duration::seconds(i as i64),
        })
        .collect()
}
