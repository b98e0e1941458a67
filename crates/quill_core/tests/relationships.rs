use quill_core::{
    seed_demo_data, CreateComment, CreatePerson, CreatePost, EntityReader,
    MemoryEntityRepository, MutationService, Person, QueryService,
};

fn person(service: &mut MutationService<&mut MemoryEntityRepository>, email: &str) -> Person {
    service
        .create_person(CreatePerson {
            name: email.to_string(),
            email: email.to_string(),
            age: None,
        })
        .unwrap()
}

#[test]
fn list_posts_matches_title_case_insensitively() {
    let mut repo = MemoryEntityRepository::new();
    seed_demo_data(&mut repo).unwrap();

    let query = QueryService::new(&repo);
    let hits = query.list_posts(Some("most")).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Post with the Most");
}

#[test]
fn list_people_is_idempotent_without_mutations() {
    let mut repo = MemoryEntityRepository::new();
    seed_demo_data(&mut repo).unwrap();

    let query = QueryService::new(&repo);
    let first = query.list_people(None).unwrap();
    let second = query.list_people(None).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
    assert_eq!(first[0].name, "Joey John-John");
}

#[test]
fn posts_of_person_keeps_creation_order_and_skips_other_authors() {
    let mut repo = MemoryEntityRepository::new();
    let (alice, bob) = {
        let mut service = MutationService::new(&mut repo);
        (person(&mut service, "alice@x.com"), person(&mut service, "bob@x.com"))
    };

    let mut expected = Vec::new();
    {
        let mut service = MutationService::new(&mut repo);
        for (index, author) in [&alice, &bob, &alice, &bob, &alice].iter().enumerate() {
            let post = service
                .create_post(CreatePost {
                    title: format!("post {index}"),
                    body: String::new(),
                    published: index % 2 == 0,
                    author: author.id,
                })
                .unwrap();
            if author.id == alice.id {
                expected.push(post);
            }
        }
    }

    let query = QueryService::new(&repo);
    assert_eq!(query.posts_of_person(&alice).unwrap(), expected);
    assert_eq!(query.posts_of_person(&bob).unwrap().len(), 2);
    for post in &expected {
        assert_eq!(query.author_of_post(post).unwrap().as_ref(), Some(&alice));
    }
}

#[test]
fn created_comment_is_visible_through_post_and_author() {
    let mut repo = MemoryEntityRepository::new();
    seed_demo_data(&mut repo).unwrap();
    let post = repo.posts().unwrap().remove(1);
    let author = repo.people().unwrap().remove(0);

    let comment = MutationService::new(&mut repo)
        .create_comment(CreateComment {
            text: "late reply".to_string(),
            author: author.id,
            post: post.id,
        })
        .unwrap();

    let query = QueryService::new(&repo);
    assert!(query.comments_of_post(&post).unwrap().contains(&comment));
    let by_author = query.comments_of_person(&author).unwrap();
    assert_eq!(by_author.last(), Some(&comment));
    assert_eq!(query.author_of_comment(&comment).unwrap(), Some(author));
    assert_eq!(query.post_of_comment(&comment).unwrap(), Some(post));
}

#[test]
fn demo_graph_resolves_both_directions() {
    let mut repo = MemoryEntityRepository::new();
    seed_demo_data(&mut repo).unwrap();
    let query = QueryService::new(&repo);

    let most = query.list_posts(Some("MOST")).unwrap().remove(0);
    let comments = query.comments_of_post(&most).unwrap();
    assert_eq!(comments.len(), 2);
    assert_eq!(query.list_comments().unwrap(), comments);

    let joey = query.list_people(Some("joey")).unwrap().remove(0);
    assert_eq!(query.posts_of_person(&joey).unwrap(), vec![most]);
    assert_eq!(query.comments_of_person(&joey).unwrap().len(), 1);
}

#[test]
fn relationships_to_unpublished_posts_still_resolve() {
    let mut repo = MemoryEntityRepository::new();
    seed_demo_data(&mut repo).unwrap();
    let author = repo.people().unwrap().remove(0);

    let draft = MutationService::new(&mut repo)
        .create_post(CreatePost {
            title: "draft".to_string(),
            body: "wip".to_string(),
            published: false,
            author: author.id,
        })
        .unwrap();

    let query = QueryService::new(&repo);
    assert!(query.posts_of_person(&author).unwrap().contains(&draft));
    assert!(query.comments_of_post(&draft).unwrap().is_empty());
}
