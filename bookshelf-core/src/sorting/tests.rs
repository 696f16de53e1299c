//! Tests for toggling and multi-pass sorting

#[cfg(test)]
mod tests {
    use crate::sorting::{
        AttributeName, DirectiveSequence, PassOrder, RatingComparison,
        SortAttribute, SortDirection, SortDirective, SortEngine,
        SortIndicator, SortSettings, SortState, direction_of, sort, toggle,
    };
    use bookshelf_model::{Book, Genre, Rating};

    fn create_test_book(title: &str, author: &str, rating: Option<f32>) -> Book {
        let book = Book::new(title).with_author(author);
        match rating {
            Some(value) => book.with_rating(Rating::new(value).unwrap()),
            None => book,
        }
    }

    fn titles(books: &[Book]) -> Vec<&str> {
        books.iter().map(|book| book.title.as_str()).collect()
    }

    fn ratings(books: &[Book]) -> Vec<Option<f32>> {
        books
            .iter()
            .map(|book| book.rating.map(Rating::value))
            .collect()
    }

    #[test]
    fn test_toggle_cycle() {
        let empty = DirectiveSequence::new();

        let first = toggle(&empty, SortAttribute::Author);
        assert_eq!(
            first.as_slice(),
            &[SortDirective::ascending(SortAttribute::Author)]
        );

        let second = toggle(&first, SortAttribute::Author);
        assert_eq!(
            second.as_slice(),
            &[SortDirective::descending(SortAttribute::Author)]
        );

        let third = toggle(&second, SortAttribute::Author);
        assert!(third.is_empty());
    }

    #[test]
    fn test_toggle_independence() {
        let seq = toggle(&DirectiveSequence::new(), SortAttribute::Title);
        let seq = toggle(&seq, SortAttribute::Genre);
        assert_eq!(
            seq.as_slice(),
            &[
                SortDirective::ascending(SortAttribute::Title),
                SortDirective::ascending(SortAttribute::Genre),
            ]
        );

        let flipped = toggle(&seq, SortAttribute::Title);
        assert_eq!(
            flipped.as_slice(),
            &[
                SortDirective::descending(SortAttribute::Title),
                SortDirective::ascending(SortAttribute::Genre),
            ]
        );

        let removed = toggle(&flipped, SortAttribute::Title);
        assert_eq!(
            removed.as_slice(),
            &[SortDirective::ascending(SortAttribute::Genre)]
        );

        // Re-adding goes to the back.
        let readded = toggle(&removed, SortAttribute::Title);
        assert_eq!(
            readded.as_slice(),
            &[
                SortDirective::ascending(SortAttribute::Genre),
                SortDirective::ascending(SortAttribute::Title),
            ]
        );
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let books = vec![
            create_test_book("A", "", Some(2.0)),
            create_test_book("A", "", Some(10.0)),
        ];
        let seq = DirectiveSequence::from(vec![SortDirective::ascending(
            SortAttribute::Title,
        )]);

        let sorted = sort(&books, &seq);
        assert_eq!(ratings(&sorted), vec![Some(2.0), Some(10.0)]);

        let desc = DirectiveSequence::from(vec![SortDirective::descending(
            SortAttribute::Title,
        )]);
        assert_eq!(ratings(&sort(&books, &desc)), vec![Some(2.0), Some(10.0)]);
    }

    #[test]
    fn test_last_directive_dominates() {
        let books = vec![
            create_test_book("B", "Z", None),
            create_test_book("A", "Z", None),
            create_test_book("C", "X", None),
        ];
        let seq = toggle(&DirectiveSequence::new(), SortAttribute::Title);
        let seq = toggle(&seq, SortAttribute::Author);

        let sorted = sort(&books, &seq);
        let pairs: Vec<(&str, &str)> = sorted
            .iter()
            .map(|book| (book.author_name(), book.title.as_str()))
            .collect();
        assert_eq!(pairs, vec![("X", "C"), ("Z", "A"), ("Z", "B")]);
    }

    #[test]
    fn test_first_directive_dominates_when_configured() {
        let books = vec![
            create_test_book("B", "Z", None),
            create_test_book("A", "Z", None),
            create_test_book("C", "X", None),
        ];
        let seq = DirectiveSequence::from(vec![
            SortDirective::ascending(SortAttribute::Title),
            SortDirective::ascending(SortAttribute::Author),
        ]);
        let engine = SortEngine::new(SortSettings {
            pass_order: PassOrder::FirstDominates,
            ..SortSettings::default()
        });

        assert_eq!(titles(&engine.sort(&books, &seq)), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_rating_sorts_as_text() {
        let books = vec![
            create_test_book("two", "", Some(2.0)),
            create_test_book("ten", "", Some(10.0)),
            create_test_book("three", "", Some(3.0)),
        ];
        let seq = toggle(&DirectiveSequence::new(), SortAttribute::Rating);

        assert_eq!(
            ratings(&sort(&books, &seq)),
            vec![Some(10.0), Some(2.0), Some(3.0)]
        );

        let seq = toggle(&seq, SortAttribute::Rating);
        assert_eq!(
            ratings(&sort(&books, &seq)),
            vec![Some(3.0), Some(2.0), Some(10.0)]
        );
    }

    #[test]
    fn test_rating_sorts_numerically_when_configured() {
        let books = vec![
            create_test_book("two", "", Some(2.0)),
            create_test_book("unrated", "", None),
            create_test_book("ten", "", Some(10.0)),
            create_test_book("three", "", Some(3.0)),
        ];
        let engine = SortEngine::new(SortSettings {
            rating_comparison: RatingComparison::Numeric,
            ..SortSettings::default()
        });

        let asc = toggle(&DirectiveSequence::new(), SortAttribute::Rating);
        assert_eq!(
            titles(&engine.sort(&books, &asc)),
            vec!["two", "three", "ten", "unrated"]
        );

        let desc = toggle(&asc, SortAttribute::Rating);
        assert_eq!(
            titles(&engine.sort(&books, &desc)),
            vec!["ten", "three", "two", "unrated"]
        );
    }

    #[test]
    fn test_empty_inputs() {
        let books = vec![
            create_test_book("C", "", None),
            create_test_book("A", "", None),
            create_test_book("B", "", None),
        ];
        assert_eq!(sort(&books, &DirectiveSequence::new()), books);

        let seq = DirectiveSequence::from(vec![
            SortDirective::descending(SortAttribute::Shelf),
            SortDirective::ascending(SortAttribute::Rating),
        ]);
        assert!(sort::<Book>(&[], &seq).is_empty());
    }

    #[test]
    fn test_input_is_not_reordered() {
        let books = vec![
            create_test_book("C", "", None),
            create_test_book("A", "", None),
            create_test_book("B", "", None),
        ];
        let snapshot = books.clone();
        let seq = toggle(&DirectiveSequence::new(), SortAttribute::Title);

        let sorted = sort(&books, &seq);
        assert_eq!(titles(&sorted), vec!["A", "B", "C"]);
        assert_eq!(books, snapshot);
    }

    #[test]
    fn test_missing_nested_fields_sort_as_empty() {
        let books = vec![
            create_test_book("has author", "Le Guin", None),
            Book::new("no author"),
            create_test_book("another", "Adams", None),
        ];
        let seq = toggle(&DirectiveSequence::new(), SortAttribute::Author);
        assert_eq!(
            titles(&sort(&books, &seq)),
            vec!["no author", "another", "has author"]
        );

        let shelved = vec![
            Book::new("b").with_shelf("Read"),
            Book::new("a"),
            Book::new("c").with_shelf("Reading"),
        ];
        let seq = toggle(&DirectiveSequence::new(), SortAttribute::Shelf);
        assert_eq!(titles(&sort(&shelved, &seq)), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_genre_sorts_by_display_name() {
        let books = vec![
            Book::new("x").with_genre(Genre::Thriller),
            Book::new("y").with_genre(Genre::Adventure),
            Book::new("z").with_genre(Genre::ScienceFiction),
        ];
        let seq = toggle(&DirectiveSequence::new(), SortAttribute::Genre);
        assert_eq!(titles(&sort(&books, &seq)), vec!["y", "z", "x"]);
    }

    #[test]
    fn test_unknown_attribute_sorts_by_title() {
        let books = vec![
            create_test_book("Beta", "A", None),
            create_test_book("Alpha", "B", None),
        ];
        let seq = toggle(&DirectiveSequence::new(), "pages");
        assert_eq!(titles(&sort(&books, &seq)), vec!["Alpha", "Beta"]);
    }

    #[test]
    fn test_direction_lookup_matches_toggled_sequence() {
        let mut state = SortState::new();
        state.toggle(SortAttribute::Title);
        state.toggle(SortAttribute::Rating);
        state.toggle(SortAttribute::Rating);
        state.toggle(SortAttribute::Shelf);
        state.toggle(SortAttribute::Shelf);
        state.toggle(SortAttribute::Shelf);

        let lookup = direction_of(state.directives());
        assert_eq!(lookup.len(), state.directives().len());
        assert_eq!(
            lookup.direction(SortAttribute::Title),
            Some(SortDirection::Ascending)
        );
        assert_eq!(
            lookup.direction(SortAttribute::Rating),
            Some(SortDirection::Descending)
        );
        assert_eq!(lookup.direction(SortAttribute::Shelf), None);
        assert_eq!(lookup.direction(SortAttribute::Author), None);
        assert_eq!(lookup.get(&AttributeName::from("genre")), None);
    }

    #[test]
    fn test_view_bundles_items_and_indicators() {
        let books = vec![
            create_test_book("B", "", None),
            create_test_book("A", "", None),
        ];
        let mut state = SortState::new();
        state.toggle(SortAttribute::Title);
        state.toggle(SortAttribute::Title);

        let view = SortEngine::default().view(&books, state.directives());
        assert_eq!(titles(&view.items), vec!["B", "A"]);
        assert_eq!(
            view.indicator(SortAttribute::Title),
            SortIndicator::Descending
        );
        assert_eq!(view.indicator(SortAttribute::Author), SortIndicator::None);
    }

    #[test]
    fn test_order_is_a_permutation() {
        let books = vec![
            create_test_book("b", "", None),
            create_test_book("c", "", None),
            create_test_book("a", "", None),
        ];
        let seq = toggle(&DirectiveSequence::new(), SortAttribute::Title);
        assert_eq!(SortEngine::default().order(&books, &seq), vec![2, 0, 1]);
    }

    #[test]
    fn test_results_are_deterministic() {
        let books = vec![
            create_test_book("Dune", "Herbert", Some(5.0)),
            create_test_book("Emma", "Austen", Some(4.0)),
            create_test_book("dune", "herbert", Some(5.0)),
            create_test_book("Beloved", "Morrison", None),
        ];
        let seq = DirectiveSequence::from(vec![
            SortDirective::descending(SortAttribute::Rating),
            SortDirective::ascending(SortAttribute::Author),
        ]);
        let first = sort(&books, &seq);
        let second = sort(&books, &seq);
        assert_eq!(first, second);
        assert_eq!(titles(&first), vec!["Emma", "dune", "Dune", "Beloved"]);
    }

    #[test]
    fn test_case_variant_name_is_its_own_directive() {
        let seq = toggle(&DirectiveSequence::new(), "title");
        let seq = toggle(&seq, "Title");
        assert_eq!(
            seq.as_slice(),
            &[
                SortDirective::ascending(SortAttribute::Title),
                SortDirective::ascending(AttributeName::Unrecognized(
                    "Title".to_string()
                )),
            ]
        );

        let seq = toggle(&seq, "Title");
        let lookup = direction_of(&seq);
        assert_eq!(
            lookup.direction(SortAttribute::Title),
            Some(SortDirection::Ascending)
        );
        assert_eq!(
            lookup.get(&AttributeName::from("Title")),
            Some(SortDirection::Descending)
        );
    }

    #[test]
    fn test_padded_name_sorts_by_title_without_indicator() {
        let books = vec![
            create_test_book("A", "", None),
            create_test_book("C", "", None),
            create_test_book("B", "", None),
        ];
        let mut state = SortState::new();
        state.toggle(" title ");
        state.toggle(" title ");

        let view = SortEngine::default().view(&books, state.directives());
        assert_eq!(titles(&view.items), vec!["C", "B", "A"]);
        assert_eq!(view.indicator(SortAttribute::Title), SortIndicator::None);
    }

    #[test]
    fn test_accented_text_sorts_with_base_letters() {
        let books = vec![
            create_test_book("Zola", "Zweig", None),
            create_test_book("Émile", "García Márquez", None),
            create_test_book("Anna", "Čapek", None),
            create_test_book("Bleak House", "Dickens", None),
        ];
        let by_title = toggle(&DirectiveSequence::new(), SortAttribute::Title);
        assert_eq!(
            titles(&sort(&books, &by_title)),
            vec!["Anna", "Bleak House", "Émile", "Zola"]
        );

        let by_author = toggle(&DirectiveSequence::new(), SortAttribute::Author);
        let authors: Vec<String> = sort(&books, &by_author)
            .iter()
            .map(|book| book.author_name().to_string())
            .collect();
        assert_eq!(
            authors,
            vec!["Čapek", "Dickens", "García Márquez", "Zweig"]
        );
    }
}
