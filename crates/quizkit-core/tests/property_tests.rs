use std::collections::BTreeSet;

use proptest::prelude::*;
use quizkit_core::scorer::is_correct;
use quizkit_core::session::{QuizEvent, QuizState};
use quizkit_core::tracker::SelectionTracker;
use quizkit_core::{AnswerSet, Correctness, Question, QuestionKind, Quiz, Selection};

// --- STRATEGIES ---

prop_compose! {
    fn arb_multi_question()(
        len in 2usize..8
    )(
        correct in proptest::collection::btree_set(0..len, 1..=len),
        len in Just(len)
    ) -> Question {
        Question::new(
            "multi",
            "pick all that apply",
            QuestionKind::Multi,
            (0..len).map(|i| format!("choice {i}")).collect(),
            Correctness::IndexSet(correct),
        )
        .unwrap()
    }
}

prop_compose! {
    fn arb_single_question()(
        boolean in any::<bool>(),
        len in 2usize..8
    )(
        correct in 0..(if boolean { 2 } else { len }),
        boolean in Just(boolean),
        len in Just(len)
    ) -> Question {
        let (kind, len) = if boolean {
            (QuestionKind::Boolean, 2)
        } else {
            (QuestionKind::Single, len)
        };
        Question::new(
            "single",
            "pick one",
            kind,
            (0..len).map(|i| format!("choice {i}")).collect(),
            Correctness::SingleIndex(correct),
        )
        .unwrap()
    }
}

fn arb_question() -> impl Strategy<Value = Question> {
    prop_oneof![arb_multi_question(), arb_single_question()]
}

proptest! {
    #[test]
    fn single_select_keeps_only_last(q in arb_single_question(), a in 0usize..8, b in 0usize..8) {
        let len = q.choices().len();
        let (a, b) = (a % len, b % len);
        prop_assume!(a != b);

        let mut tracker = SelectionTracker::for_question(&q);
        tracker.toggle(a).unwrap();
        tracker.toggle(b).unwrap();
        prop_assert_eq!(tracker.selection(), &Selection::from([b]));
    }

    #[test]
    fn multi_select_toggle_is_involution(
        q in arb_multi_question(),
        prefix in proptest::collection::vec(0usize..8, 0..10),
        x in 0usize..8
    ) {
        let len = q.choices().len();
        let mut tracker = SelectionTracker::for_question(&q);
        for choice in prefix {
            tracker.toggle(choice % len).unwrap();
        }
        let before = tracker.selection().clone();

        tracker.toggle(x % len).unwrap();
        tracker.toggle(x % len).unwrap();
        prop_assert_eq!(tracker.selection(), &before);
    }

    #[test]
    fn empty_commit_always_rejected(q in arb_question()) {
        let quiz = Quiz::new("prop", "Prop", "", vec![q]).unwrap();
        let (state, err) = QuizState::start(quiz).apply(QuizEvent::Commit);
        prop_assert!(err.is_some());
        prop_assert!(!state.is_graded());
    }

    #[test]
    fn index_set_grading_is_set_equality(
        correct in proptest::collection::btree_set(0usize..6, 1..6),
        selection in proptest::collection::btree_set(0usize..6, 0..6)
    ) {
        let expected = correct == selection;
        prop_assert_eq!(is_correct(&Correctness::IndexSet(correct), &selection), expected);
    }

    #[test]
    fn single_index_grading_is_membership(
        correct in 0usize..6,
        selection in proptest::collection::btree_set(0usize..6, 0..6)
    ) {
        let expected = selection.contains(&correct);
        prop_assert_eq!(is_correct(&Correctness::SingleIndex(correct), &selection), expected);
    }

    #[test]
    fn full_session_grades_with_one_entry_per_question(
        questions in proptest::collection::vec(arb_question(), 1..6),
        picks in proptest::collection::vec(0usize..8, 6)
    ) {
        let quiz = Quiz::new("prop", "Prop", "", questions).unwrap();
        let total = quiz.len();
        let mut state = QuizState::start(quiz.clone());

        for pick in picks.iter().take(total) {
            let QuizState::AwaitingSelection(mut screen) = state else {
                return Err(TestCaseError::fail("graded before the last question"));
            };
            let len = screen.question().choices().len();
            screen.toggle(pick % len).unwrap();
            state = screen.commit().unwrap();
        }

        let QuizState::Graded(graded) = state else {
            return Err(TestCaseError::fail("not graded after the last question"));
        };
        prop_assert_eq!(graded.answers().len(), total);
        prop_assert_eq!(graded.report().total, total);

        let regraded = quizkit_core::grade(quiz.questions(), graded.answers());
        prop_assert_eq!(&regraded, graded.report());
    }

    #[test]
    fn grading_never_panics_on_ragged_answers(
        questions in proptest::collection::vec(arb_question(), 1..6),
        raw in proptest::collection::vec(proptest::collection::vec(0usize..10, 0..4), 0..10)
    ) {
        let answers = AnswerSet::from(raw);
        let report = quizkit_core::grade(&questions, &answers);
        prop_assert_eq!(report.total, questions.len());
        prop_assert_eq!(report.per_question.len(), questions.len());
        prop_assert!(report.score <= report.total);
        prop_assert_eq!(answers.get(99), &BTreeSet::new());
    }
}
