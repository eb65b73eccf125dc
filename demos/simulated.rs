//! Example monitoring a simulated four-part download

use color_eyre::Result;
use dlwatch::session::Transfer;
use dlwatch::MonitorBuilder;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

const PART_SIZE: u64 = 2 * 1024 * 1024;
const CHUNK: usize = 64 * 1024;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dlwatch::logging::init_stderr();

    let directory = std::env::temp_dir().join("dlwatch-demo");
    std::fs::create_dir_all(&directory)?;

    // One output file per part, written concurrently.
    let paths: Vec<PathBuf> = (0..4)
        .map(|i| directory.join(format!("simulated.bin.part{}", i)))
        .collect();
    for path in &paths {
        std::fs::File::create(path)?;
    }

    let transfer = Transfer::multi_part(paths.clone(), vec![PART_SIZE; paths.len()])?;
    let monitor = MonitorBuilder::new("simulated.bin", transfer)
        .directory(directory.clone())
        .build()?;

    let writers = paths.into_iter().enumerate().map(|(i, path)| {
        tokio::spawn(async move {
            let mut file = OpenOptions::new().append(true).open(path)?;
            let chunk = vec![0u8; CHUNK];
            let delay = Duration::from_millis(20 + 15 * i as u64);
            let mut written = 0u64;
            while written < PART_SIZE {
                file.write_all(&chunk)?;
                written += CHUNK as u64;
                tokio::time::sleep(delay).await;
            }
            Ok::<(), std::io::Error>(())
        })
    });
    let writers: Vec<_> = writers.collect();

    let (written, report) = monitor
        .watch(async {
            for writer in writers {
                writer.await??;
            }
            Ok::<(), color_eyre::Report>(())
        })
        .await?;
    written?;

    println!("\nFinished after {} ticks.", report.ticks());

    Ok(())
}
