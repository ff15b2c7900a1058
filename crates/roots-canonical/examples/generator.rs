use roots_canonical::{compute_event_id, serialize, CanonicalEvent, Tag};

fn main() {
    let tags = vec![Tag::new(["t", "roots"])];
    let event = CanonicalEvent {
        pubkey: "cfa87f35acbde29ba1ab3ee42de527b2cad33ac487e80cf2d6405ea0042c8fef",
        created_at: 1760740551,
        kind: 1,
        tags: &tags,
        content: "hello world",
    };

    match serialize(&event) {
        Ok(bytes) => println!("{}", String::from_utf8_lossy(&bytes)),
        Err(err) => {
            eprintln!("canonicalization failed: {}", err);
            std::process::exit(1);
        }
    }

    match compute_event_id(&event) {
        Ok(id) => println!("{}", id),
        Err(err) => {
            eprintln!("id computation failed: {}", err);
            std::process::exit(1);
        }
    }
}
