use crate::models::domain::{Quiz, QuizQuestion};

/// Built-in DriveSmart Academy quiz set, used when no catalog file is
/// configured.
pub fn seed_quizzes() -> Vec<Quiz> {
    let yellow_light = QuizQuestion {
        id: "1".to_string(),
        prompt: "What should you do when approaching a yellow traffic light?".to_string(),
        options: vec![
            "Speed up to get through".to_string(),
            "Stop if it is safe to do so".to_string(),
            "Always stop immediately".to_string(),
            "Ignore it and continue".to_string(),
        ],
        correct_answer: 1,
        explanation: "Yellow light means caution - stop if you can do so safely, otherwise \
                      proceed with care."
            .to_string(),
        image: Some(
            "https://images.unsplash.com/photo-1502134249126-9f3755a50d78?w=300&h=200&fit=crop"
                .to_string(),
        ),
    };

    let stop_sign = QuizQuestion {
        id: "2".to_string(),
        prompt: "What does this road sign mean?".to_string(),
        options: vec![
            "No parking".to_string(),
            "Yield right of way".to_string(),
            "Stop completely".to_string(),
            "Speed limit 50".to_string(),
        ],
        correct_answer: 2,
        explanation: "A red octagonal sign always means you must come to a complete stop."
            .to_string(),
        image: Some(
            "https://images.unsplash.com/photo-1544724569-5f546fd6f2b5?w=300&h=200&fit=crop"
                .to_string(),
        ),
    };

    vec![
        Quiz {
            id: "1".to_string(),
            title: "Traffic Rules Basics".to_string(),
            description: "Test your knowledge of fundamental traffic rules".to_string(),
            category: "Traffic Rules".to_string(),
            questions: vec![yellow_light, stop_sign.clone()],
            time_limit_seconds: Some(300),
            passing_score: 80,
        },
        Quiz {
            id: "2".to_string(),
            title: "Road Signs Recognition".to_string(),
            description: "Identify common road signs and their meanings".to_string(),
            category: "Road Signs".to_string(),
            questions: vec![stop_sign],
            time_limit_seconds: Some(180),
            passing_score: 85,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_quizzes_are_well_formed() {
        let quizzes = seed_quizzes();

        assert_eq!(quizzes.len(), 2);
        for quiz in &quizzes {
            assert!(quiz.validate_definition().is_ok(), "quiz '{}' invalid", quiz.id);
            assert!(quiz.is_timed());
        }
    }

    #[test]
    fn seed_quiz_ids_are_unique() {
        let quizzes = seed_quizzes();

        assert_ne!(quizzes[0].id, quizzes[1].id);
    }
}
