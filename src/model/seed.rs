//! Default document written on first run or after a corrupt load.

use super::document::{Document, Exercise, Program, TargetReps, Workout};
use super::input::DEFAULT_SETS;

const SEED: &[(&str, &str, &[(&str, u32, u32)])] = &[
    (
        "Day 1",
        "Push A",
        &[
            ("Bench Press", 5, 8),
            ("Overhead Press", 6, 10),
            ("Triceps Pushdown", 10, 15),
        ],
    ),
    (
        "Day 2",
        "Pull A",
        &[
            ("Deadlift", 3, 5),
            ("Barbell Row", 6, 10),
            ("Lat Pulldown", 8, 12),
        ],
    ),
];

/// "Base Strength": a push day and a pull day, three exercises each.
pub fn seed_document() -> Document {
    let mut doc = Document::default();
    let mut program = Program::new(doc.fresh_program_id(), "Base Strength");

    for (name, label, exercises) in SEED {
        let mut workout = Workout::new(doc.fresh_workout_id(), *name, *label);
        for (ex_name, min, max) in exercises.iter() {
            let exercise = Exercise {
                id: workout.fresh_exercise_id(),
                name: ex_name.to_string(),
                sets: DEFAULT_SETS,
                target_reps: TargetReps::new(*min, *max),
                notes: String::new(),
            };
            workout.exercises.push(exercise);
        }
        program.workouts.push(workout.id.clone());
        doc.workouts.insert(workout.id.clone(), workout);
    }

    doc.programs.push(program);
    doc
}
