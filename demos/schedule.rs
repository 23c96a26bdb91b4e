//! Kirkman's schoolgirl problem, and a look at how the schedules are built.
//!
//! Fifteen schoolgirls walk out three abreast for seven days; arrange them
//! so that no two walk together twice. This demo solves that case, then a
//! three-group system whose extra days come from class splitting.

use kirkman::construct::{ClassBuilder, ConstructionKind};
use kirkman::design::ClassKey;
use kirkman::{verify_solution, Kts, KtsBuilder};

fn main() {
    println!("Kirkman - Schoolgirl Schedule Example\n");

    // The original puzzle: 15 girls, 7 days
    let mut kts15 = Kts::new(15).expect("Failed to configure KTS(15)");
    println!("{}\n", kts15);

    let solution = kts15.solve().expect("Failed to solve KTS(15)");
    print!("{}", solution);

    let result = verify_solution(solution);
    if result.is_valid {
        println!(
            "✓ {} distinct triples, every pair of girls meets exactly once",
            result.distinct_triples
        );
    } else {
        println!("✗ Schedule failed verification");
        for issue in &result.issues {
            println!("  Issue: {}", issue);
        }
    }

    println!();

    // A three-group system: q real days plus regrouped remainder days
    let mut kts21 = KtsBuilder::new()
        .order(21)
        .construction(ConstructionKind::ThreeGroup)
        .build()
        .expect("Failed to configure KTS(21)");
    println!("{}\n", kts21);

    kts21.solve().expect("Failed to solve KTS(21)");
    if let Some(classes) = kts21.classes() {
        for (day, class) in classes.iter().enumerate() {
            let origin = match class.key() {
                ClassKey::Offset(i) => format!("offset {}", i),
                ClassKey::Remainder(label) => format!("remainder {}", label),
            };
            println!("Day {:>2} ({}):", day + 1, origin);
            for block in class.blocks() {
                println!("    {:<7} {}", block.label.to_string(), block.triple);
            }
        }
    }

    println!();

    // Orders where both constructions apply
    for kind in ConstructionKind::ALL {
        let kts = KtsBuilder::new()
            .order(39)
            .construction(kind)
            .build()
            .expect("Failed to configure KTS(39)");
        let builder = kts.construction().as_builder();
        println!(
            "KTS(39) via {}: q = {}, {} days of {} triples",
            kind,
            builder.field_size(),
            builder.class_count(),
            builder.blocks_per_class()
        );
    }
}
