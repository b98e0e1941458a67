//! Demo dataset: two people, two published posts, two comments.
//!
//! Everything goes through [`MutationService`], so seeding obeys the same
//! constraints as any caller and fails cleanly on a store that already holds
//! the demo emails.

use crate::repo::entity_repo::EntityRepository;
use crate::service::mutation_service::{
    CreateComment, CreatePerson, CreatePost, MutationResult, MutationService,
};
use log::info;

/// Counts of what [`seed_demo_data`] created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub people: usize,
    pub posts: usize,
    pub comments: usize,
}

pub fn seed_demo_data<R: EntityRepository>(repo: &mut R) -> MutationResult<SeedSummary> {
    let mut mutation = MutationService::new(repo);

    let joey = mutation.create_person(CreatePerson {
        name: "Joey John-John".to_string(),
        email: "joey@shabalagoo.john".to_string(),
        age: None,
    })?;
    let barney = mutation.create_person(CreatePerson {
        name: "Barney Gumble".to_string(),
        email: "bgumble@moesbar.com".to_string(),
        age: None,
    })?;

    let most = mutation.create_post(CreatePost {
        title: "Post with the Most".to_string(),
        body: "dsfj ldsjf kjsdf sdj".to_string(),
        published: true,
        author: joey.id,
    })?;
    mutation.create_post(CreatePost {
        title: "Youhklih Bojh".to_string(),
        body: "dsf ijfsdjlk lhjjdsf".to_string(),
        published: true,
        author: barney.id,
    })?;

    mutation.create_comment(CreateComment {
        text: "dakfjdl lksdfj dsjflksdj".to_string(),
        author: joey.id,
        post: most.id,
    })?;
    mutation.create_comment(CreateComment {
        text: "rweuwe uhkj hkyuioy uy uiyo".to_string(),
        author: barney.id,
        post: most.id,
    })?;

    let summary = SeedSummary {
        people: 2,
        posts: 2,
        comments: 2,
    };
    info!(
        "event=seed_demo module=seed status=ok people={} posts={} comments={}",
        summary.people, summary.posts, summary.comments
    );
    Ok(summary)
}
