use std::path::Path;

use anyhow::Result;
use tokio::{
    fs::{create_dir_all, File},
    io::{stdin, AsyncReadExt, AsyncWriteExt},
};

async fn create_parent_dirs_for(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        create_dir_all(parent).await?;
    }
    Ok(())
}

pub async fn create_file<P>(name: P) -> Result<File>
where
    P: AsRef<Path>,
{
    create_parent_dirs_for(name.as_ref()).await?;
    let file = File::create(name).await?;
    Ok(file)
}

pub async fn save_file<P, B>(name: P, bytes: B) -> Result<()>
where
    P: AsRef<Path>,
    B: AsRef<[u8]>,
{
    let mut file = create_file(name).await?;
    file.write_all(bytes.as_ref()).await?;
    file.flush().await?;
    Ok(())
}

/// Read the URL list from `path`, or from stdin for `None` and `-`.
pub async fn read_input<P>(path: Option<P>) -> Result<String>
where
    P: AsRef<Path>,
{
    match path {
        Some(path) if path.as_ref() != Path::new("-") => {
            Ok(tokio::fs::read_to_string(path).await?)
        }
        _ => {
            let mut text = String::new();
            stdin().read_to_string(&mut text).await?;
            Ok(text)
        }
    }
}
