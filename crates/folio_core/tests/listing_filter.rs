use folio_core::{
    filter_and_sort, matches, ContentItem, DateRange, Difficulty, FilterState, ItemId,
    Performance, ProjectStatus, RangeFilter, Selection, Sort, SortKey, TagMatch,
};

fn guides() -> Vec<ContentItem> {
    vec![
        ContentItem::blog_post(1_u64, "React Guide", "Hooks and patterns", "Web")
            .with_tags(["React"]),
        ContentItem::blog_post(2_u64, "ML Basics", "Intro to models", "ML").with_tags(["Python"]),
    ]
}

fn projects() -> Vec<ContentItem> {
    vec![
        ContentItem::project("chat", "MERN Chat", "Realtime chat", "Web Development")
            .with_tags(["React", "Node.js", "MongoDB"])
            .with_date("2023-06-01")
            .with_status(ProjectStatus::Completed)
            .with_difficulty(Difficulty::Intermediate)
            .with_team_size(1)
            .with_industry("Social")
            .with_performance(Performance {
                build_time: 45,
                bundle_size: 320,
                lighthouse: 88,
            }),
        ContentItem::project("rag", "RAG Expert", "Private document search", "AI & Web")
            .with_tags(["Python", "LangChain"])
            .with_date("2024-02-10")
            .with_status(ProjectStatus::InProgress)
            .with_difficulty(Difficulty::Advanced)
            .with_featured(true)
            .with_team_size(3)
            .with_industry("Healthcare"),
        ContentItem::project("folio", "Portfolio", "Next.js site", "Web Development")
            .with_tags(["React", "Tailwind"])
            .with_date("2024-05-20")
            .with_status(ProjectStatus::Completed)
            .with_difficulty(Difficulty::Beginner)
            .with_featured(true)
            .with_team_size(6)
            .with_industry("Personal")
            .with_performance(Performance {
                build_time: 20,
                bundle_size: 150,
                lighthouse: 98,
            }),
    ]
}

fn ids(items: &[&ContentItem]) -> Vec<ItemId> {
    items.iter().map(|item| item.id.clone()).collect()
}

fn titles(items: &[&ContentItem]) -> Vec<String> {
    items.iter().map(|item| item.title.clone()).collect()
}

#[test]
fn query_matches_title_case_insensitively() {
    let items = guides();
    let result = filter_and_sort(&items, &FilterState::with_query("react"));
    assert_eq!(ids(&result), vec![ItemId::Number(1)]);
}

#[test]
fn query_matches_excerpt_and_tags() {
    let items = projects();
    assert_eq!(
        ids(&filter_and_sort(&items, &FilterState::with_query("DOCUMENT"))),
        vec![ItemId::from("rag")]
    );
    assert_eq!(
        ids(&filter_and_sort(&items, &FilterState::with_query("tail"))),
        vec![ItemId::from("folio")]
    );
}

#[test]
fn blank_query_matches_everything() {
    let items = projects();
    for query in ["", "   "] {
        let result = filter_and_sort(&items, &FilterState::with_query(query));
        assert_eq!(result.len(), items.len());
    }
}

#[test]
fn category_selects_exact_matches() {
    let items = guides();
    let state = FilterState {
        category: Selection::label("ML"),
        ..FilterState::default()
    };
    assert_eq!(ids(&filter_and_sort(&items, &state)), vec![ItemId::Number(2)]);
}

#[test]
fn all_category_is_equivalent_to_no_category_filter() {
    let items = projects();
    let mut with_all = FilterState::with_query("a");
    with_all.category = Selection::label("All");
    with_all.featured_only = true;

    let mut without = with_all.clone();
    without.category = Selection::Any;

    assert_eq!(
        filter_and_sort(&items, &with_all),
        filter_and_sort(&items, &without)
    );
}

#[test]
fn multi_tag_selection_is_conjunctive_by_default() {
    let items = vec![
        ContentItem::blog_post(1_u64, "Both", "e", "Web").with_tags(["A", "B"]),
        ContentItem::blog_post(2_u64, "One", "e", "Web").with_tags(["A"]),
    ];
    let mut state = FilterState::default();
    state.toggle_tag("A");
    state.toggle_tag("B");

    assert_eq!(ids(&filter_and_sort(&items, &state)), vec![ItemId::Number(1)]);
}

#[test]
fn any_tag_match_is_disjunctive() {
    let items = projects();
    let state = FilterState {
        tags: vec!["LangChain".to_string(), "Tailwind".to_string()],
        tag_match: TagMatch::Any,
        ..FilterState::default()
    };
    assert_eq!(
        ids(&filter_and_sort(&items, &state)),
        vec![ItemId::from("rag"), ItemId::from("folio")]
    );
}

#[test]
fn tag_selection_is_case_sensitive() {
    let items = projects();
    let state = FilterState {
        tags: vec!["react".to_string()],
        ..FilterState::default()
    };
    assert!(filter_and_sort(&items, &state).is_empty());
}

#[test]
fn team_size_range_is_inclusive() {
    let items = projects();
    let state = FilterState {
        team_size: RangeFilter::between(2, 5),
        ..FilterState::default()
    };
    assert_eq!(ids(&filter_and_sort(&items, &state)), vec![ItemId::from("rag")]);

    let edges = FilterState {
        team_size: RangeFilter::between(1, 3),
        ..FilterState::default()
    };
    assert_eq!(filter_and_sort(&items, &edges).len(), 2);
}

#[test]
fn facet_filters_combine_conjunctively() {
    let items = projects();
    let state = FilterState {
        status: Selection::Only(ProjectStatus::Completed),
        featured_only: true,
        ..FilterState::default()
    };
    assert_eq!(ids(&filter_and_sort(&items, &state)), vec![ItemId::from("folio")]);

    let narrower = FilterState {
        difficulty: Selection::Only(Difficulty::Advanced),
        ..state
    };
    assert!(filter_and_sort(&items, &narrower).is_empty());
}

#[test]
fn industry_filter_matches_exact_value() {
    let items = projects();
    let state = FilterState {
        industry: Selection::label("Healthcare"),
        ..FilterState::default()
    };
    assert_eq!(ids(&filter_and_sort(&items, &state)), vec![ItemId::from("rag")]);
}

#[test]
fn items_missing_a_facet_fail_only_active_filters_on_it() {
    let mut items = guides();
    items.extend(projects());

    let untouched = FilterState::default();
    assert_eq!(filter_and_sort(&items, &untouched).len(), 5);

    let by_difficulty = FilterState {
        difficulty: Selection::Only(Difficulty::Beginner),
        ..FilterState::default()
    };
    assert_eq!(
        ids(&filter_and_sort(&items, &by_difficulty)),
        vec![ItemId::from("folio")]
    );

    let by_team = FilterState {
        team_size: RangeFilter::new(Some(1), None),
        ..FilterState::default()
    };
    assert_eq!(filter_and_sort(&items, &by_team).len(), 3);
}

#[test]
fn date_range_is_inclusive_and_skips_undated_items() {
    let mut items = projects();
    items.push(ContentItem::project("undated", "Undated", "d", "Web"));
    items.push(ContentItem::project("garbled", "Garbled", "d", "Web").with_date("someday"));

    let state = FilterState {
        date_range: DateRange::new(Some("2024-02-10".to_string()), Some("2024-05-20".to_string())),
        ..FilterState::default()
    };
    assert_eq!(
        ids(&filter_and_sort(&items, &state)),
        vec![ItemId::from("rag"), ItemId::from("folio")]
    );

    let open_end = FilterState {
        date_range: DateRange::new(Some("2024-01-01".to_string()), Some(String::new())),
        ..FilterState::default()
    };
    assert_eq!(filter_and_sort(&items, &open_end).len(), 2);
}

#[test]
fn malformed_date_bound_excludes_everything() {
    let items = projects();
    let state = FilterState {
        date_range: DateRange::new(Some("not-a-date".to_string()), None),
        ..FilterState::default()
    };
    assert!(filter_and_sort(&items, &state).is_empty());
}

#[test]
fn unsorted_results_are_a_subsequence_of_the_source() {
    let items = projects();
    let state = FilterState::with_query("e");
    let result = filter_and_sort(&items, &state);

    let mut source = items.iter();
    for picked in &result {
        assert!(source.any(|item| std::ptr::eq(item, *picked)));
    }
}

#[test]
fn evaluation_is_idempotent() {
    let items = projects();
    let state = FilterState {
        query: "react".to_string(),
        sort: Some(Sort::default()),
        ..FilterState::default()
    };
    assert_eq!(filter_and_sort(&items, &state), filter_and_sort(&items, &state));
}

#[test]
fn title_sort_orders_both_directions() {
    let items = vec![
        ContentItem::blog_post(1_u64, "Zebra", "e", "Web"),
        ContentItem::blog_post(2_u64, "Apple", "e", "Web"),
        ContentItem::blog_post(3_u64, "Mango", "e", "Web"),
    ];
    let ascending = FilterState {
        sort: Some(Sort::ascending(SortKey::Title)),
        ..FilterState::default()
    };
    assert_eq!(
        titles(&filter_and_sort(&items, &ascending)),
        vec!["Apple", "Mango", "Zebra"]
    );

    let descending = FilterState {
        sort: Some(Sort::descending(SortKey::Title)),
        ..FilterState::default()
    };
    assert_eq!(
        titles(&filter_and_sort(&items, &descending)),
        vec!["Zebra", "Mango", "Apple"]
    );
}

#[test]
fn date_sort_defaults_to_newest_first_with_undated_last() {
    let mut items = projects();
    items.insert(0, ContentItem::project("undated", "Undated", "d", "Web"));
    let state = FilterState {
        sort: Some(Sort::default()),
        ..FilterState::default()
    };
    assert_eq!(
        ids(&filter_and_sort(&items, &state)),
        vec![
            ItemId::from("folio"),
            ItemId::from("rag"),
            ItemId::from("chat"),
            ItemId::from("undated")
        ]
    );
}

#[test]
fn difficulty_sort_uses_rank_table() {
    let items = projects();
    let state = FilterState {
        sort: Some(Sort::ascending(SortKey::Difficulty)),
        ..FilterState::default()
    };
    assert_eq!(
        ids(&filter_and_sort(&items, &state)),
        vec![ItemId::from("folio"), ItemId::from("chat"), ItemId::from("rag")]
    );
}

#[test]
fn performance_sort_treats_missing_score_as_zero() {
    let items = projects();
    let state = FilterState {
        sort: Some(Sort::descending(SortKey::Performance)),
        ..FilterState::default()
    };
    assert_eq!(
        ids(&filter_and_sort(&items, &state)),
        vec![ItemId::from("folio"), ItemId::from("chat"), ItemId::from("rag")]
    );
}

#[test]
fn sort_ties_keep_source_order_in_both_directions() {
    let items = vec![
        ContentItem::blog_post(1_u64, "Same", "first", "Web").with_date("2024-01-01"),
        ContentItem::blog_post(2_u64, "Same", "second", "Web").with_date("2024-01-01"),
        ContentItem::blog_post(3_u64, "Other", "third", "Web").with_date("2023-01-01"),
    ];
    for sort in [
        Sort::ascending(SortKey::Date),
        Sort::descending(SortKey::Date),
        Sort::ascending(SortKey::Title),
        Sort::descending(SortKey::Title),
    ] {
        let state = FilterState {
            sort: Some(sort),
            ..FilterState::default()
        };
        let result = ids(&filter_and_sort(&items, &state));
        let first = result.iter().position(|id| *id == ItemId::Number(1));
        let second = result.iter().position(|id| *id == ItemId::Number(2));
        assert!(first < second, "tie order broken for {sort:?}");
    }
}

#[test]
fn empty_items_yield_empty_results() {
    let items: Vec<ContentItem> = Vec::new();
    let state = FilterState {
        query: "anything".to_string(),
        category: Selection::label("Web"),
        featured_only: true,
        sort: Some(Sort::default()),
        ..FilterState::default()
    };
    assert!(filter_and_sort(&items, &state).is_empty());
}

#[test]
fn matches_agrees_with_filter_and_sort() {
    let items = projects();
    let state = FilterState {
        tags: vec!["React".to_string()],
        ..FilterState::default()
    };
    let expected: Vec<_> = items.iter().filter(|item| matches(item, &state)).collect();
    assert_eq!(filter_and_sort(&items, &state), expected);
}

#[test]
fn long_form_dates_sort_chronologically_and_fall_in_ranges() {
    let items = vec![
        ContentItem::blog_post(1_u64, "Vector Stores", "e", "AI").with_date("May 15, 2024"),
        ContentItem::blog_post(2_u64, "Agents", "e", "AI").with_date("July 12, 2025"),
        ContentItem::blog_post(4_u64, "Prompting", "e", "AI").with_date("March 20, 2024"),
    ];

    let newest_first = FilterState {
        sort: Some(Sort::descending(SortKey::Date)),
        ..FilterState::default()
    };
    assert_eq!(
        ids(&filter_and_sort(&items, &newest_first)),
        vec![ItemId::Number(2), ItemId::Number(1), ItemId::Number(4)]
    );

    let within_2024 = FilterState {
        date_range: DateRange::new(Some("2024-01-01".to_string()), Some("2024-12-31".to_string())),
        ..FilterState::default()
    };
    assert_eq!(
        ids(&filter_and_sort(&items, &within_2024)),
        vec![ItemId::Number(1), ItemId::Number(4)]
    );
}
