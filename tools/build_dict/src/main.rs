use anyhow::{bail, Context, Result};
use libsegment_core::{utils, DictEntry, DictionaryIndex, Script};
use std::collections::HashMap;
use std::env;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Parser for word frequency lists.
/// Accepts lines like:
/// <word>\t<count>
/// or
/// <word> <count>
/// or a bare <word> (counted as 1).
fn parse_line(line: &str) -> Option<(String, u32)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    if let Some(pos) = line.rfind(['\t', ' ']) {
        let word = &line[..pos];
        if let Ok(cnt) = line[pos + 1..].trim().parse::<u32>() {
            return Some((utils::normalize(word), cnt));
        }
    }
    Some((utils::normalize(line), 1))
}

fn script_by_name(name: &str) -> Option<Script> {
    Script::ALL.into_iter().find(|s| s.name() == name)
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 4 {
        eprintln!(
            "Usage: build_dict <script> <word-list-file> [more files...] <out-dir>\n\
             Scripts: thai, lao, khmer, myanmar, cjk\n\
             Writes <out-dir>/<script>.fst and <out-dir>/<script>.bin"
        );
        std::process::exit(1);
    }

    let script = match script_by_name(&args[1]) {
        Some(s) => s,
        None => bail!("unknown script {:?}", args[1]),
    };
    let out_dir = Path::new(&args[args.len() - 1]);

    // Accumulate counts, merging duplicates across files.
    let mut counts: HashMap<String, u32> = HashMap::new();
    for path in &args[2..args.len() - 1] {
        let f = File::open(path).with_context(|| format!("open {}", path))?;
        let reader = BufReader::new(f);
        for line in reader.lines() {
            let l = line?;
            if let Some((word, cnt)) = parse_line(&l) {
                if !word.is_empty() {
                    *counts.entry(word).or_default() += cnt;
                }
            }
        }
    }
    if counts.is_empty() {
        bail!("no words parsed from input files");
    }

    // fst requires keys in sorted byte order; keep the payload in the same
    // order so the map values are plain indices.
    let mut entries: Vec<DictEntry> = counts
        .into_iter()
        .map(|(word, count)| DictEntry { word, count })
        .collect();
    entries.sort_by(|a, b| a.word.as_bytes().cmp(b.word.as_bytes()));

    let mut builder = fst::MapBuilder::memory();
    for (idx, entry) in entries.iter().enumerate() {
        builder
            .insert(entry.word.as_bytes(), idx as u64)
            .with_context(|| format!("insert {:?}", entry.word))?;
    }
    let fst_bytes = builder.into_inner().context("finish fst")?;
    let payload = bincode::serialize(&entries).context("serialize payload")?;

    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("create {}", out_dir.display()))?;
    let fst_path = out_dir.join(format!("{}.fst", script.name()));
    let bin_path = out_dir.join(format!("{}.bin", script.name()));
    std::fs::write(&fst_path, &fst_bytes)
        .with_context(|| format!("write {}", fst_path.display()))?;
    std::fs::write(&bin_path, &payload)
        .with_context(|| format!("write {}", bin_path.display()))?;

    // Load the artifacts back as a sanity check before declaring success.
    let index = DictionaryIndex::from_artifacts(script, fst_bytes, &payload)
        .map_err(|e| anyhow::anyhow!("verify artifacts: {}", e))?;
    if index.is_empty() {
        bail!("artifacts verified empty");
    }

    println!(
        "Wrote {} entries to {} and {}",
        entries.len(),
        fst_path.display(),
        bin_path.display()
    );
    Ok(())
}
