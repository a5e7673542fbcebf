mod common;

use common::{FixtureApi, MemoryStorage, policies, policy, signed_token};
use futures::executor::block_on;
use policyhub_core::{
    ApiError, Category, PAGE_SIZE, PolicyDraft, PolicyStore, Session, SessionStore, StoreError,
};
use std::cell::Cell;
use std::rc::Rc;

fn store_with(list: Vec<policyhub_core::Policy>) -> (Rc<FixtureApi>, PolicyStore) {
    let api = Rc::new(FixtureApi::default());
    *api.list.borrow_mut() = Some(Ok(list));
    let store = PolicyStore::new(api.clone());
    block_on(store.fetch_policies()).expect("fetch succeeds");
    (api, store)
}

fn active_session() -> Session {
    Session::from_token(Some(signed_token("Jane")))
}

#[test]
fn single_fetched_policy_is_visible_on_first_page() {
    let mut only = policy("1", &["a", "b"]);
    only.date = "2024-01-01".into();
    only.category = "Academic".into();
    let (_api, store) = store_with(vec![only.clone()]);

    store.set_page(1);
    let page = store.page();

    assert_eq!(page.items, vec![only]);
    assert_eq!(page.current_page, 1);
    assert_eq!(page.total_pages, 1);
}

#[test]
fn total_pages_and_slices_follow_collection_size() {
    for n in 0..=30 {
        let (_api, store) = store_with(policies(n));
        let expected_pages = n.div_ceil(PAGE_SIZE);
        assert_eq!(store.total_pages(), expected_pages, "n = {n}");

        for p in 1..=expected_pages {
            store.set_page(p);
            let page = store.page();
            let start = (p - 1) * PAGE_SIZE;
            let end = (p * PAGE_SIZE).min(n);
            let ids: Vec<String> = page.items.iter().map(|x| x.id.clone()).collect();
            let expected: Vec<String> = (start..end).map(|i| i.to_string()).collect();
            assert_eq!(ids, expected, "n = {n}, page = {p}");
        }
    }
}

#[test]
fn out_of_range_pages_are_ignored() {
    let (_api, store) = store_with(policies(15));
    store.set_page(2);
    for p in [0, 4, 5, 100, usize::MAX] {
        store.set_page(p);
        assert_eq!(store.current_page(), 2, "page {p} should be ignored");
    }
    store.set_page(3);
    assert_eq!(store.current_page(), 3);
    assert_eq!(store.page().items.len(), 1);
}

#[test]
fn empty_collection_ignores_every_page() {
    let (_api, store) = store_with(Vec::new());
    store.set_page(1);
    assert_eq!(store.current_page(), 1);
    assert!(store.page().items.is_empty());
    assert_eq!(store.page().total_pages, 0);
}

#[test]
fn failed_fetch_keeps_previous_collection() {
    let (api, store) = store_with(policies(3));
    *api.list.borrow_mut() = Some(Err(ApiError::Status {
        status: 500,
        message: None,
    }));

    let result = block_on(store.fetch_policies());

    assert!(matches!(result, Err(StoreError::Api(ApiError::Status { status: 500, .. }))));
    assert_eq!(store.len(), 3);
}

#[test]
fn add_policy_appends_server_copy_verbatim() {
    let (api, store) = store_with(policies(2));
    let mut created = policy("srv-42", &[]);
    created.owner = "Server Assigned".into();
    created.date = "2025-05-05T00:00:00Z".into();
    *api.add.borrow_mut() = Some(Ok(created.clone()));

    let draft = PolicyDraft::new("Policy srv-42", "Description", Category::Academic);
    let returned = block_on(store.add_policy(&active_session(), &draft)).unwrap();

    assert_eq!(returned, created);
    assert_eq!(store.policies().last(), Some(&created));
    assert_eq!(store.len(), 3);
}

#[test]
fn upvote_adopts_server_votes_instead_of_incrementing() {
    let (api, store) = store_with(vec![policy("1", &["Jane"]), policy("2", &[])]);
    // The server already holds Jane's vote and refuses a second one.
    *api.upvote.borrow_mut() = Some(Ok(policy("1", &["Jane"])));

    let votes = block_on(store.upvote_policy(&active_session(), "1")).unwrap();

    assert_eq!(votes, vec!["Jane".to_string()]);
    assert_eq!(store.policies()[0].vote_count(), 1);
    assert_eq!(store.policies()[1].vote_count(), 0);
}

#[test]
fn upvote_replaces_votes_with_server_list() {
    let (api, store) = store_with(vec![policy("1", &["a"])]);
    *api.upvote.borrow_mut() = Some(Ok(policy("1", &["a", "b", "Jane"])));

    block_on(store.upvote_policy(&active_session(), "1")).unwrap();

    assert_eq!(store.policies()[0].votes, vec!["a", "b", "Jane"]);
}

#[test]
fn upvote_for_unknown_local_id_leaves_collection_alone() {
    let (api, store) = store_with(vec![policy("1", &["a"])]);
    *api.upvote.borrow_mut() = Some(Ok(policy("99", &["x", "y"])));
    let before = store.policies();

    let votes = block_on(store.upvote_policy(&active_session(), "99")).unwrap();

    assert_eq!(votes.len(), 2);
    assert_eq!(store.policies(), before);
}

#[test]
fn failed_upvote_leaves_state_untouched() {
    let (api, store) = store_with(vec![policy("1", &["a"])]);
    *api.upvote.borrow_mut() = Some(Err(ApiError::Transport("offline".into())));

    let result = block_on(store.upvote_policy(&active_session(), "1"));

    assert!(matches!(result, Err(StoreError::Api(ApiError::Transport(_)))));
    assert_eq!(store.policies()[0].votes, vec!["a"]);
}

#[test]
fn logged_out_session_never_reaches_the_server() {
    let auth_api = Rc::new(FixtureApi::default());
    let storage = Rc::new(MemoryStorage::with_token(&signed_token("Jane")));
    let sessions = SessionStore::new(auth_api, storage);
    sessions.logout();

    let (api, store) = store_with(policies(2));
    *api.add.borrow_mut() = Some(Ok(policy("new", &[])));
    *api.upvote.borrow_mut() = Some(Ok(policy("0", &["Jane"])));
    let before = store.policies();
    let session = sessions.session();

    let draft = PolicyDraft::new("t", "d", Category::Other);
    assert_eq!(
        block_on(store.add_policy(&session, &draft)),
        Err(StoreError::Unauthenticated)
    );
    assert_eq!(
        block_on(store.upvote_policy(&session, "0")),
        Err(StoreError::Unauthenticated)
    );

    assert_eq!(api.calls(), vec!["list".to_string()]);
    assert_eq!(store.policies(), before);
}

#[test]
fn token_without_display_name_counts_as_logged_out() {
    let (api, store) = store_with(policies(1));
    let session = Session::from_token(Some("opaque".into()));

    let result = block_on(store.upvote_policy(&session, "0"));

    assert_eq!(result, Err(StoreError::Unauthenticated));
    assert_eq!(api.calls(), vec!["list".to_string()]);
}

#[test]
fn fetch_policy_maps_not_found_and_keeps_collection() {
    let (api, store) = store_with(policies(2));
    *api.get.borrow_mut() = Some(Err(ApiError::NotFound));
    assert_eq!(block_on(store.fetch_policy("missing")), Err(StoreError::NotFound));

    *api.get.borrow_mut() = Some(Ok(policy("1", &["a"])));
    let found = block_on(store.fetch_policy("1")).unwrap();
    assert_eq!(found.votes, vec!["a"]);
    assert_eq!(store.len(), 2);
}

#[test]
fn subscribers_hear_successful_mutations_only() {
    let api = Rc::new(FixtureApi::default());
    let store = PolicyStore::new(api.clone());
    let hits = Rc::new(Cell::new(0));
    {
        let hits = hits.clone();
        store.subscribe(move || hits.set(hits.get() + 1));
    }

    let _ = block_on(store.fetch_policies());
    assert_eq!(hits.get(), 0, "unscripted fetch fails");

    *api.list.borrow_mut() = Some(Ok(policies(10)));
    block_on(store.fetch_policies()).unwrap();
    assert_eq!(hits.get(), 1);

    store.set_page(2);
    assert_eq!(hits.get(), 2);
    store.set_page(9);
    assert_eq!(hits.get(), 2);
}
