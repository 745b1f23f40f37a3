use colored::*;
use serde_json::Value;
use std::io::{self, Write};
use std::time::Instant;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", "🎬 MovieStream Testing Tool".bright_blue().bold());
    println!("{}", "=====================================".bright_blue());
    println!();

    // Paso 1: Pedir la URL del servidor
    let base_url = get_base_url()?;
    let client = reqwest::Client::new();

    // Paso 2: Menú principal
    loop {
        println!();
        println!("{}", "📋 MENÚ PRINCIPAL".bright_green().bold());
        println!("{}", "==================".bright_green());
        println!("1. 💓 Health check");
        println!("2. 🏷️  Obtener géneros");
        println!("3. 🔍 Buscar películas");
        println!("4. ▶️  Obtener trailers de una película");
        println!("5. 🗄️  Verificar cache (misma petición dos veces)");
        println!("6. 🚪 Salir");
        print!("{}", "Selecciona una opción (1-6): ".bright_yellow());
        io::stdout().flush()?;

        let choice = read_line()?;

        match choice.as_str() {
            "1" => {
                call(&client, &format!("{}/api/health", base_url)).await?;
            }
            "2" => {
                let body = call(&client, &format!("{}/api/genres", base_url)).await?;
                if let Some(genres) = body.get("genres").and_then(Value::as_array) {
                    println!("{}", format!("🏷️  {} géneros", genres.len()).bright_green().bold());
                }
            }
            "3" => {
                let url = movies_url(&base_url)?;
                let body = call(&client, &url).await?;
                print_movies(&body);
            }
            "4" => {
                print!("{}", "ID de la película: ".bright_yellow());
                io::stdout().flush()?;
                let movie_id = read_line()?;
                let body = call(&client, &format!("{}/api/movies/{}/videos", base_url, movie_id)).await?;
                print_videos(&body);
            }
            "5" => {
                let url = format!("{}/api/genres", base_url);
                call(&client, &url).await?;
                call(&client, &url).await?;
                println!("{}", "ℹ️  La segunda llamada debería ser notablemente más rápida".bright_blue());
            }
            "6" => {
                println!("{}", "👋 ¡Hasta luego!".bright_green());
                break;
            }
            _ => {
                println!("{}", "❌ Opción inválida. Intenta de nuevo.".bright_red());
            }
        }
    }

    Ok(())
}

fn read_line() -> Result<String, Box<dyn std::error::Error>> {
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn get_base_url() -> Result<String, Box<dyn std::error::Error>> {
    println!("{}", "🌐 SERVIDOR".bright_cyan().bold());
    println!("{}", "===========".bright_cyan());

    print!("{}", "URL base (enter = http://localhost:8000): ".bright_yellow());
    io::stdout().flush()?;
    let url = read_line()?;

    if url.is_empty() {
        Ok("http://localhost:8000".to_string())
    } else {
        Ok(url.trim_end_matches('/').to_string())
    }
}

fn movies_url(base_url: &str) -> Result<String, Box<dyn std::error::Error>> {
    print!("{}", "Búsqueda (enter = descubrir): ".bright_yellow());
    io::stdout().flush()?;
    let q = read_line()?;

    print!("{}", "Orden (popular/newest/rating): ".bright_yellow());
    io::stdout().flush()?;
    let sort = read_line()?;

    print!("{}", "Página (enter = 1): ".bright_yellow());
    io::stdout().flush()?;
    let page = read_line()?;

    let mut url = reqwest::Url::parse(&format!("{}/api/movies", base_url))?;
    {
        let mut pairs = url.query_pairs_mut();
        if !q.is_empty() {
            pairs.append_pair("q", &q);
        }
        if !sort.is_empty() {
            pairs.append_pair("sort", &sort);
        }
        pairs.append_pair("page", if page.is_empty() { "1" } else { page.as_str() });
    }
    Ok(url.to_string())
}

async fn call(client: &reqwest::Client, url: &str) -> Result<Value, Box<dyn std::error::Error>> {
    println!();
    println!("{}", "📤 URL:".bright_blue());
    println!("{}", url);

    let started = Instant::now();
    let response = client.get(url).send().await?;
    let elapsed = started.elapsed();
    let status = response.status();
    let body: Value = response.json().await.unwrap_or(Value::Null);

    if status.is_success() {
        println!("{}", format!("✅ {} en {:?}", status, elapsed).bright_green().bold());
    } else {
        println!("{}", format!("❌ {} en {:?}", status, elapsed).bright_red().bold());
        println!("{}", serde_json::to_string_pretty(&body)?);
    }

    Ok(body)
}

fn print_movies(body: &Value) {
    let Some(results) = body.get("results").and_then(Value::as_array) else {
        println!("{}", "⚠️ La respuesta no contiene resultados".bright_yellow());
        return;
    };

    println!(
        "{}",
        format!("🎞️  {} películas (total: {})", results.len(), body["total_results"]).bright_green().bold()
    );
    for movie in results.iter().take(10) {
        println!(
            "   {} - {} ({})",
            movie["id"],
            movie["title"].as_str().unwrap_or("?"),
            movie["release_date"].as_str().unwrap_or("N/A")
        );
    }
}

fn print_videos(body: &Value) {
    let videos = body.get("results").and_then(Value::as_array).cloned().unwrap_or_default();
    if videos.is_empty() {
        println!("{}", "⚠️ No hay trailers de YouTube".bright_yellow());
        return;
    }
    for video in &videos {
        println!(
            "   ▶️  {} - https://www.youtube.com/watch?v={}",
            video["name"].as_str().unwrap_or("?"),
            video["key"].as_str().unwrap_or("")
        );
    }
}
