use bexpp::parser::parse;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Debug,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let inputs = ["a+b*c", "ab'", "(ab)'", "a'b + c", "(a+b)(c+d)'", "((a^b)*c)' + 1"];

    for text in inputs {
        let e = match parse(text) {
            Ok(e) => e,
            Err(err) => {
                println!("{:?}: {}", text, err);
                continue;
            }
        };
        println!("input   = {:?}", text);
        println!("polish  = {}", e.polish_notation(false));
        println!("pretty  = {}", e.polish_notation(true));
        println!("common  = {}", e);

        let variables: Vec<char> = e.variables().into_iter().collect();
        let set = e.truth_set(&variables)?;
        println!("truth   = {:?} over {:?}", set, variables);
        println!();
    }

    Ok(())
}
