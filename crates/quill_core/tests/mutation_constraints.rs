use quill_core::db::open_db_in_memory;
use quill_core::{
    ConstraintViolation, CreateComment, CreatePerson, CreatePost, EntityReader,
    EntityRepository, MemoryEntityRepository, MutationError, MutationService, Person, Post,
    SqliteEntityRepository,
};
use std::collections::HashSet;
use uuid::Uuid;

fn sqlite_repo() -> SqliteEntityRepository {
    SqliteEntityRepository::try_new(open_db_in_memory().unwrap()).unwrap()
}

fn person_input(name: &str, email: &str) -> CreatePerson {
    CreatePerson {
        name: name.to_string(),
        email: email.to_string(),
        age: None,
    }
}

fn add_person<R: EntityRepository>(service: &mut MutationService<R>, email: &str) -> Person {
    service.create_person(person_input("Author", email)).unwrap()
}

fn add_post<R: EntityRepository>(
    service: &mut MutationService<R>,
    author: &Person,
    published: bool,
) -> Post {
    service
        .create_post(CreatePost {
            title: "title".to_string(),
            body: "body".to_string(),
            published,
            author: author.id,
        })
        .unwrap()
}

fn duplicate_email_is_rejected<R: EntityRepository>(repo: R) {
    let mut service = MutationService::new(repo);
    service.create_person(person_input("X", "dup@x.com")).unwrap();

    let err = service
        .create_person(person_input("Y", "dup@x.com"))
        .unwrap_err();
    assert!(matches!(
        err,
        MutationError::Constraint(ConstraintViolation::EmailTaken)
    ));

    let people = service.repo().people().unwrap();
    let with_email: Vec<&Person> = people.iter().filter(|p| p.email == "dup@x.com").collect();
    assert_eq!(with_email.len(), 1);
    assert_eq!(with_email[0].name, "X");
}

#[test]
fn duplicate_email_is_rejected_in_memory() {
    duplicate_email_is_rejected(MemoryEntityRepository::new());
}

#[test]
fn duplicate_email_is_rejected_in_sqlite() {
    duplicate_email_is_rejected(sqlite_repo());
}

fn emails_stay_unique<R: EntityRepository>(repo: R) {
    let mut service = MutationService::new(repo);
    let attempts = ["a@x.com", "b@x.com", "a@x.com", "c@x.com", "b@x.com", "a@x.com"];
    let mut rejected = 0;
    for email in attempts {
        if service.create_person(person_input("P", email)).is_err() {
            rejected += 1;
        }
    }
    assert_eq!(rejected, 3);

    let people = service.repo().people().unwrap();
    let emails: HashSet<&str> = people.iter().map(|p| p.email.as_str()).collect();
    assert_eq!(emails.len(), people.len());
    let ids: HashSet<Uuid> = people.iter().map(|p| p.id).collect();
    assert_eq!(ids.len(), people.len());
}

#[test]
fn emails_stay_unique_in_memory() {
    emails_stay_unique(MemoryEntityRepository::new());
}

#[test]
fn emails_stay_unique_in_sqlite() {
    emails_stay_unique(sqlite_repo());
}

fn post_with_unknown_author_is_rejected<R: EntityRepository>(repo: R) {
    let mut service = MutationService::new(repo);
    let author = add_person(&mut service, "real@x.com");
    add_post(&mut service, &author, true);
    let before = service.repo().posts().unwrap().len();

    let err = service
        .create_post(CreatePost {
            title: "t".to_string(),
            body: "b".to_string(),
            published: true,
            author: Uuid::new_v4(),
        })
        .unwrap_err();

    assert_eq!(err.constraint(), Some(ConstraintViolation::AuthorNotFound));
    assert_eq!(err.to_string(), "User not found");
    assert_eq!(service.repo().posts().unwrap().len(), before);
}

#[test]
fn post_with_unknown_author_is_rejected_in_memory() {
    post_with_unknown_author_is_rejected(MemoryEntityRepository::new());
}

#[test]
fn post_with_unknown_author_is_rejected_in_sqlite() {
    post_with_unknown_author_is_rejected(sqlite_repo());
}

fn comment_on_unpublished_post_is_rejected<R: EntityRepository>(repo: R) {
    let mut service = MutationService::new(repo);
    let author = add_person(&mut service, "writer@x.com");
    let draft = add_post(&mut service, &author, false);
    let before = service.repo().comments().unwrap().len();

    let err = service
        .create_comment(CreateComment {
            text: "first!".to_string(),
            author: author.id,
            post: draft.id,
        })
        .unwrap_err();

    assert_eq!(
        err.constraint(),
        Some(ConstraintViolation::AuthorOrPostInvalid)
    );
    assert_eq!(service.repo().comments().unwrap().len(), before);
}

#[test]
fn comment_on_unpublished_post_is_rejected_in_memory() {
    comment_on_unpublished_post_is_rejected(MemoryEntityRepository::new());
}

#[test]
fn comment_on_unpublished_post_is_rejected_in_sqlite() {
    comment_on_unpublished_post_is_rejected(sqlite_repo());
}

#[test]
fn comment_with_unknown_author_on_published_post_is_rejected() {
    let mut service = MutationService::new(MemoryEntityRepository::new());
    let author = add_person(&mut service, "writer@x.com");
    let post = add_post(&mut service, &author, true);

    let err = service
        .create_comment(CreateComment {
            text: "who am i".to_string(),
            author: Uuid::new_v4(),
            post: post.id,
        })
        .unwrap_err();
    assert_eq!(err.to_string(), "This user or post (or both) doesn't exist");
    assert!(service.repo().comments().unwrap().is_empty());
}

#[test]
fn successful_creates_return_the_stored_record() {
    let mut service = MutationService::new(sqlite_repo());
    let person = service
        .create_person(CreatePerson {
            name: "Aged".to_string(),
            email: "aged@x.com".to_string(),
            age: Some(27),
        })
        .unwrap();
    let post = add_post(&mut service, &person, true);
    let comment = service
        .create_comment(CreateComment {
            text: "nice".to_string(),
            author: person.id,
            post: post.id,
        })
        .unwrap();

    let repo = service.into_inner();
    assert_eq!(repo.people().unwrap(), vec![person]);
    assert_eq!(repo.posts().unwrap(), vec![post]);
    assert_eq!(repo.comments().unwrap(), vec![comment]);
}

fn blank_and_odd_fields_are_accepted<R: EntityRepository>(repo: R) {
    let mut service = MutationService::new(repo);
    let person = service
        .create_person(CreatePerson {
            name: String::new(),
            email: "joey".to_string(),
            age: Some(-3),
        })
        .unwrap();
    let post = service
        .create_post(CreatePost {
            title: String::new(),
            body: String::new(),
            published: true,
            author: person.id,
        })
        .unwrap();
    let comment = service
        .create_comment(CreateComment {
            text: " ".to_string(),
            author: person.id,
            post: post.id,
        })
        .unwrap();

    let repo = service.into_inner();
    assert_eq!(repo.people().unwrap(), vec![person]);
    assert_eq!(repo.posts().unwrap(), vec![post]);
    assert_eq!(repo.comments().unwrap(), vec![comment]);
}

#[test]
fn blank_and_odd_fields_are_accepted_in_memory() {
    blank_and_odd_fields_are_accepted(MemoryEntityRepository::new());
}

#[test]
fn blank_and_odd_fields_are_accepted_in_sqlite() {
    blank_and_odd_fields_are_accepted(sqlite_repo());
}
