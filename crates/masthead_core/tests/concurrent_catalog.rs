use masthead_core::{
    open_catalog, ArticleService, AuthorService, InMemoryCatalogRepository, MagazineService,
};
use std::collections::HashSet;
use std::thread;

const WRITERS: usize = 8;
const ARTICLES_PER_WRITER: usize = 25;
const RACE_ROUNDS: usize = 200;

#[test]
fn concurrent_creates_append_each_article_exactly_once() {
    let catalog = open_catalog();
    let authors = AuthorService::new(InMemoryCatalogRepository::new(&catalog));
    let magazines = MagazineService::new(InMemoryCatalogRepository::new(&catalog));
    let articles = ArticleService::new(InMemoryCatalogRepository::new(&catalog));
    let tech = magazines.create_magazine("Tech Weekly", "Tech").unwrap();
    let writers: Vec<_> = (0..WRITERS)
        .map(|index| authors.create_author(format!("Writer {index}")).unwrap())
        .collect();

    let created: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = writers
            .iter()
            .map(|writer| {
                let articles = &articles;
                let magazine = tech.id();
                scope.spawn(move || {
                    (0..ARTICLES_PER_WRITER)
                        .map(|index| {
                            let title = format!("Dispatch {index:03}");
                            articles
                                .create_article(writer.id(), magazine, title)
                                .unwrap()
                                .id()
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    let registry = articles.list_articles().unwrap();
    assert_eq!(registry.len(), WRITERS * ARTICLES_PER_WRITER);
    assert_eq!(articles.article_count().unwrap(), registry.len());

    let unique: HashSet<_> = registry.iter().map(|article| article.id()).collect();
    assert_eq!(unique.len(), registry.len());

    // Each writer's own articles keep the order that writer created them in.
    for (writer, ids) in writers.iter().zip(created) {
        let in_registry: Vec<_> = authors
            .articles(writer.id())
            .unwrap()
            .iter()
            .map(|article| article.id())
            .collect();
        assert_eq!(in_registry, ids);
    }
}

#[test]
fn concurrent_author_and_magazine_reassignments_both_stick() {
    let catalog = open_catalog();
    let authors = AuthorService::new(InMemoryCatalogRepository::new(&catalog));
    let magazines = MagazineService::new(InMemoryCatalogRepository::new(&catalog));
    let articles = ArticleService::new(InMemoryCatalogRepository::new(&catalog));
    let alice = authors.create_author("Alice").unwrap();
    let bob = authors.create_author("Bob").unwrap();
    let tech = magazines.create_magazine("Tech Weekly", "Tech").unwrap();
    let food = magazines.create_magazine("Food Monthly", "Food").unwrap();

    for _ in 0..RACE_ROUNDS {
        let article = articles
            .create_article(alice.id(), tech.id(), "Contested article")
            .unwrap();

        thread::scope(|scope| {
            scope.spawn(|| articles.reassign_author(article.id(), bob.id()).unwrap());
            scope.spawn(|| articles.reassign_magazine(article.id(), food.id()).unwrap());
        });

        let stored = articles.get_article(article.id()).unwrap().unwrap();
        assert_eq!(stored.author(), bob.id());
        assert_eq!(stored.magazine(), food.id());
    }
}

#[test]
fn concurrent_rename_and_recategorize_both_stick() {
    let catalog = open_catalog();
    let magazines = MagazineService::new(InMemoryCatalogRepository::new(&catalog));

    for round in 0..RACE_ROUNDS {
        let magazine = magazines.create_magazine("Tech Weekly", "Tech").unwrap();
        let name = format!("Issue {round}");
        let category = format!("Science {round}");

        thread::scope(|scope| {
            scope.spawn(|| {
                assert!(magazines
                    .rename_magazine(magazine.id(), name.as_str())
                    .unwrap())
            });
            scope.spawn(|| {
                assert!(magazines
                    .recategorize_magazine(magazine.id(), category.as_str())
                    .unwrap())
            });
        });

        let stored = magazines.get_magazine(magazine.id()).unwrap().unwrap();
        assert_eq!(stored.name(), name);
        assert_eq!(stored.category(), category);
    }
}
