use typewrite_core::{export_plan_json, write, Playback, FAST_SPEED};

fn main() {
    let request = write("What hath night to do with sleep? ")
        .naturally()
        .during(FAST_SPEED);

    let mut anim = request.into_animation(String::new()).unwrap();

    println!(
        "schedule:\n{}",
        serde_json::to_string_pretty(&export_plan_json(&anim.to_plan())).unwrap()
    );

    anim.start();
    while anim.playback() == Playback::Running {
        anim.tick(16);
    }

    println!("typed: {:?}", anim.target());
}
