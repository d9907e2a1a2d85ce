//! RichDoc CLI - Render, validate, and inspect rich-text payload files
//!
//! Usage:
//!   rdcli [OPTIONS] <FILE>
//!
//! Commands:
//!   render    Render the payload to an instruction tree (default)
//!   validate  Check the payload for decode errors
//!   stats     Show payload and instruction statistics

use std::env;
use std::fs;
use std::process;

use richdoc_core::{
    parse, render, render_plain_text, render_rich_content, FontWeight, Instruction, Node,
    StylePreset,
};
use serde::Serialize;

fn main() {
    let args: Vec<String> = env::args().collect();

    match run(&args) {
        Ok(()) => {}
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}

fn run(args: &[String]) -> Result<(), String> {
    let config = parse_args(args)?;

    let input = fs::read_to_string(&config.file)
        .map_err(|e| format!("failed to read '{}': {}", config.file, e))?;

    match config.command {
        Command::Render => cmd_render(&input, &config),
        Command::Validate => cmd_validate(&input, &config),
        Command::Stats => cmd_stats(&input, &config),
    }
}

#[derive(Debug)]
struct Config {
    command: Command,
    file: String,
    format: OutputFormat,
    plain: bool,
}

#[derive(Debug, Clone, Copy)]
enum Command {
    Render,
    Validate,
    Stats,
}

#[derive(Debug, Clone, Copy)]
enum OutputFormat {
    Text,
    Json,
}

fn parse_args(args: &[String]) -> Result<Config, String> {
    let mut command = Command::Render;
    let mut format = OutputFormat::Text;
    let mut plain = false;
    let mut file = None;

    let mut i = 1;
    while i < args.len() {
        let arg = &args[i];
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                process::exit(0);
            }
            "-V" | "--version" => {
                println!("rdcli {}", env!("CARGO_PKG_VERSION"));
                process::exit(0);
            }
            "-j" | "--json" => format = OutputFormat::Json,
            "-p" | "--plain" => plain = true,
            "render" => command = Command::Render,
            "validate" => command = Command::Validate,
            "stats" => command = Command::Stats,
            _ if arg.starts_with('-') => {
                return Err(format!("unknown option: {}", arg));
            }
            _ => {
                if file.is_some() {
                    return Err("multiple files specified".to_string());
                }
                file = Some(arg.clone());
            }
        }
        i += 1;
    }

    let file = file.ok_or_else(|| "no input file specified".to_string())?;

    Ok(Config {
        command,
        file,
        format,
        plain,
    })
}

fn print_help() {
    eprintln!(
        r#"rdcli - rich-text payload renderer and validator

USAGE:
    rdcli [OPTIONS] [COMMAND] <FILE>

COMMANDS:
    render      Render the payload to an instruction tree (default)
    validate    Check the payload for decode errors without output
    stats       Show payload and instruction statistics

OPTIONS:
    -p, --plain      Treat the file as plain-text fallback content
    -j, --json       Output in JSON format
    -h, --help       Print help information
    -V, --version    Print version information

EXAMPLES:
    rdcli description.json           Render a payload file
    rdcli -j description.json        Output instructions as JSON
    rdcli -p description.txt         Render plain text via the fallback path
    rdcli validate description.json  Validate without output
    rdcli stats description.json     Show payload statistics
"#
    );
}

// =============================================================================
// Render Command
// =============================================================================

fn cmd_render(input: &str, config: &Config) -> Result<(), String> {
    let instructions = if config.plain {
        render_plain_text(Some(input))
    } else {
        match parse(input) {
            Ok(root) => render(Some(&root)),
            Err(error) => {
                eprintln!("warning: {}", error);
                render_rich_content(Some(input), None)
            }
        }
    };

    match config.format {
        OutputFormat::Json => print_json(&instructions),
        OutputFormat::Text => print_instructions(&instructions, 0),
    }

    Ok(())
}

fn print_json(instructions: &[Instruction]) {
    match serde_json::to_string_pretty(instructions) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("error: failed to serialize instructions: {}", e),
    }
}

fn print_instructions(instructions: &[Instruction], depth: usize) {
    let pad = "  ".repeat(depth);
    for instruction in instructions {
        match instruction {
            Instruction::Text(block) => {
                println!("{}text [{}]", pad, preset_label(block.preset));
                for span in &block.spans {
                    let mut notes = String::new();
                    if span.weight == FontWeight::Bold {
                        notes.push_str(" bold");
                    }
                    if let Some(color) = &span.color {
                        notes.push_str(&format!(" color={}", color));
                    }
                    println!("{}  {:?}{}", pad, span.text, notes);
                }
            }
            Instruction::Spacer(spacer) => {
                println!("{}spacer [height={}]", pad, spacer.height);
            }
            Instruction::ListRow(row) => {
                println!("{}{} list row", pad, row.marker);
                print_instructions(&row.content, depth + 1);
            }
        }
    }
}

fn preset_label(preset: StylePreset) -> String {
    let style = preset.block_style();
    let name = match preset {
        StylePreset::Heading { level } => format!("heading {}", level),
        StylePreset::Paragraph => "paragraph".to_string(),
        StylePreset::PlainText => "plain".to_string(),
        StylePreset::Placeholder => "placeholder".to_string(),
        StylePreset::Error => "error".to_string(),
    };

    let mut label = format!("{} size={} weight={}", name, style.size, style.weight.value());
    if style.italic {
        label.push_str(" italic");
    }
    if let Some(color) = style.color {
        label.push_str(&format!(" color={}", color));
    }
    label
}

// =============================================================================
// Validate Command
// =============================================================================

fn cmd_validate(input: &str, config: &Config) -> Result<(), String> {
    match parse(input) {
        Ok(_) => {
            if matches!(config.format, OutputFormat::Json) {
                println!(r#"{{"valid": true, "errors": []}}"#);
            } else {
                println!("Valid: payload decoded");
            }
            Ok(())
        }
        Err(error) => {
            if matches!(config.format, OutputFormat::Json) {
                let report = serde_json::json!({
                    "valid": false,
                    "errors": [{
                        "message": error.message,
                        "line": error.line,
                        "column": error.column,
                        "kind": format!("{:?}", error.kind),
                    }]
                });
                println!("{}", report);
            } else {
                eprintln!("Invalid: {}", error);
            }
            Err("payload is not renderable as structured content".to_string())
        }
    }
}

// =============================================================================
// Stats Command
// =============================================================================

fn cmd_stats(input: &str, config: &Config) -> Result<(), String> {
    let root = match parse(input) {
        Ok(root) => root,
        Err(error) => return Err(format!("cannot gather stats: {}", error)),
    };
    let instructions = render(Some(&root));

    let stats = PayloadStats::gather(&root, &instructions, input);

    if matches!(config.format, OutputFormat::Json) {
        let json = serde_json::to_string_pretty(&stats)
            .map_err(|e| format!("failed to serialize stats: {}", e))?;
        println!("{}", json);
        return Ok(());
    }

    println!("Payload Statistics");
    println!("------------------");
    println!("Nodes:");
    println!("  Total:          {}", stats.total_nodes);
    println!("  Headings:       {}", stats.headings);
    println!("  Paragraphs:     {}", stats.paragraphs);
    println!("  Bullet lists:   {}", stats.bullet_lists);
    println!("  List items:     {}", stats.list_items);
    println!("  Text runs:      {}", stats.text_runs);
    println!("  Unknown:        {}", stats.unknown_nodes);
    println!();
    println!("Instructions:");
    println!("  Text blocks:    {}", stats.text_blocks);
    println!("  Spacers:        {}", stats.spacers);
    println!("  List rows:      {}", stats.list_rows);
    println!();
    println!("Size:");
    println!("  Payload bytes:  {}", stats.payload_bytes);
    println!("  Text chars:     {}", stats.text_chars);

    Ok(())
}

#[derive(Default, Serialize)]
struct PayloadStats {
    total_nodes: usize,
    headings: usize,
    paragraphs: usize,
    bullet_lists: usize,
    list_items: usize,
    text_runs: usize,
    unknown_nodes: usize,
    text_blocks: usize,
    spacers: usize,
    list_rows: usize,
    payload_bytes: usize,
    text_chars: usize,
}

impl PayloadStats {
    fn gather(root: &Node, instructions: &[Instruction], input: &str) -> Self {
        let mut stats = Self {
            payload_bytes: input.len(),
            ..Self::default()
        };
        stats.count_node(root);
        stats.count_instructions(instructions);
        stats
    }

    fn count_node(&mut self, node: &Node) {
        self.total_nodes += 1;
        match node {
            Node::Document(doc) => {
                for child in &doc.children {
                    self.count_node(child);
                }
            }
            Node::Heading(heading) => {
                self.headings += 1;
                self.count_runs(&heading.children);
            }
            Node::Paragraph(paragraph) => {
                self.paragraphs += 1;
                self.count_runs(&paragraph.children);
            }
            Node::BulletList(list) => {
                self.bullet_lists += 1;
                for item in &list.items {
                    self.list_items += 1;
                    for child in &item.children {
                        self.count_node(child);
                    }
                }
            }
            Node::ListItem(item) => {
                self.list_items += 1;
                for child in &item.children {
                    self.count_node(child);
                }
            }
            Node::Unknown => self.unknown_nodes += 1,
        }
    }

    fn count_runs(&mut self, children: &[richdoc_core::Inline]) {
        for inline in children {
            match inline {
                richdoc_core::Inline::Run(run) => {
                    self.text_runs += 1;
                    self.text_chars += run.text.chars().count();
                }
                richdoc_core::Inline::Unknown => self.unknown_nodes += 1,
            }
        }
    }

    fn count_instructions(&mut self, instructions: &[Instruction]) {
        for instruction in instructions {
            match instruction {
                Instruction::Text(_) => self.text_blocks += 1,
                Instruction::Spacer(_) => self.spacers += 1,
                Instruction::ListRow(row) => {
                    self.list_rows += 1;
                    self.count_instructions(&row.content);
                }
            }
        }
    }
}
