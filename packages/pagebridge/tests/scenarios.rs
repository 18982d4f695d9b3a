use pagebridge::{
    cursor, ArgumentNormalizer, ConnectionArgs, ConnectionBuilder, PageCursorNavigator,
    PagingError, PagingOptions,
};
use pretty_assertions::assert_eq;

fn resolve<T>(
    args: ConnectionArgs,
    hits: Vec<T>,
    total_count: i64,
) -> Result<pagebridge::Connection<T>, PagingError> {
    let options = PagingOptions::default();
    let (state, _) = ArgumentNormalizer::new(options).normalize(&args)?;
    ConnectionBuilder::new(options).build(hits, &state, &args, total_count, state.offset)
}

#[test]
fn first_page_of_a_short_result_set() {
    let connection = resolve(ConnectionArgs::paged(1, 10), (0..10).collect(), 35).unwrap();
    let pages = connection
        .page_cursors
        .around
        .iter()
        .map(|c| c.page)
        .collect::<Vec<_>>();

    assert_eq!(pages, vec![1, 2, 3, 4]);
    assert_eq!(connection.page_cursors.first, None);
    assert_eq!(connection.page_cursors.last, None);
}

#[test]
fn deep_page_end_cursor() {
    // Past the window: edges are still addressed by their absolute index.
    let connection =
        resolve(ConnectionArgs::paged(20, 30), (0..30).collect(), 10_000).unwrap();
    assert_eq!(
        connection.page_info.end_cursor.as_deref(),
        Some("YXJyYXljb25uZWN0aW9uOjU5OQ==")
    );
    assert!(!connection.page_info.has_next_page);
    assert!(connection.page_info.has_previous_page);
}

#[test]
fn after_cursor_beyond_the_window() {
    let args = ConnectionArgs::forward(3, Some(cursor::encode(297)));
    let connection = resolve(args, vec!["a", "b", "c", "d"], 303).unwrap();
    assert!(!connection.page_info.has_next_page);
    assert_eq!(connection.total_count, 303);
}

#[test]
fn page_with_empty_after_reaches_the_loader_as_page_and_size() {
    let args = ConnectionArgs {
        first: Some(20),
        after: Some(String::new()),
        page: Some(30),
        ..Default::default()
    };
    let (state, _) = ArgumentNormalizer::default().normalize(&args).unwrap();
    assert_eq!((state.page, state.size), (30, 20));
}

#[test]
fn zero_size_does_not_raise() {
    let connection = resolve(ConnectionArgs::paged(1, 0), Vec::<u8>::new(), 250).unwrap();
    assert_eq!(connection.page_cursors.around.len(), 1);
    assert_eq!(connection.total_count, 250);
}

#[test]
fn cap_invariant_holds_for_large_totals() {
    for total_count in [101, 303, 10_000] {
        for start in (0u64..120).step_by(10) {
            let args = ConnectionArgs::forward(10, start.checked_sub(1).map(cursor::encode));
            let connection = resolve(args, (0..10).collect(), total_count).unwrap();
            if start + 10 >= 100 {
                assert!(!connection.page_info.has_next_page);
            } else {
                assert!(connection.page_info.has_next_page);
            }
        }
    }
}

#[test]
fn explicit_page_takes_precedence_over_cursor_offset() {
    for (page, size) in [(1, 10), (2, 10), (7, 25), (30, 20)] {
        for after in [None, Some(cursor::encode(3)), Some(cursor::encode(250))] {
            let args = ConnectionArgs {
                first: Some(size),
                after,
                page: Some(page),
                size: Some(size),
                ..Default::default()
            };
            let (state, _) = ArgumentNormalizer::default().normalize(&args).unwrap();
            assert_eq!(state.offset, ((page - 1) * size) as u64);
            assert_eq!(state.page, page as u64);
        }
    }
}

#[test]
fn page_cursors_land_on_their_page() {
    let navigator = PageCursorNavigator::default();
    let normalizer = ArgumentNormalizer::default();
    let (state, _) = normalizer.normalize(&ConnectionArgs::paged(6, 12)).unwrap();

    for page_cursor in navigator.build(&state, 240).around {
        let args = ConnectionArgs::forward(12, Some(page_cursor.cursor));
        let (next, _) = normalizer.normalize(&args).unwrap();
        assert_eq!(next.page, page_cursor.page);
        assert_eq!(next.offset, (page_cursor.page - 1) * 12);
    }
}
