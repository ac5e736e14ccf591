fn main() -> Result<(), Box<dyn std::error::Error>> {
    podium::cli::main()
}
