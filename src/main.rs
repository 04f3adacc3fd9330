fn main() {
    if let Err(err) = rfid_door_diagrams::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
