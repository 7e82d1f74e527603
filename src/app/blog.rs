use leptos::{prelude::*, server_fn::codec::GetUrl};
use leptos_meta::Title;
use leptos_router::{components::A, hooks::use_params_map};

use super::{flatten, SectionHeading};
use crate::{
    api::ApiError,
    blog::{BlogFeed, FeedState, Post, PostList},
};

const MAX_POSTS: u32 = 6;

#[server(input = GetUrl)]
pub async fn get_posts_server(
    max_results: u32,
) -> Result<Result<PostList, ApiError>, ServerFnError> {
    use crate::api::client::ApiClient;

    let client = expect_context::<ApiClient>();
    Ok(client.fetch_posts(max_results).await)
}

#[server(input = GetUrl)]
pub async fn get_post_server(id: String) -> Result<Result<Post, ApiError>, ServerFnError> {
    use crate::api::client::ApiClient;

    let client = expect_context::<ApiClient>();
    Ok(client.get_post(&id).await)
}

#[component]
pub fn BlogSection() -> impl IntoView {
    let posts = Resource::new(|| (), |_| async { flatten(get_posts_server(MAX_POSTS).await) });
    // survives refetches so a failed retry keeps what was already shown
    let feed = StoredValue::new(BlogFeed::default());

    view! {
        <section id="blog" class="py-20 px-4">
            <div class="max-w-6xl mx-auto">
                <SectionHeading title="Blog" subtitle="Thoughts on AI, ML and building things" />
                <Transition fallback=move || {
                    view! {
                        <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                            <div class="loading-skeleton h-48 rounded-lg"></div>
                            <div class="loading-skeleton h-48 rounded-lg"></div>
                            <div class="loading-skeleton h-48 rounded-lg"></div>
                        </div>
                    }
                }>
                    {move || Suspend::new(async move {
                        let result = posts.await;
                        feed.update_value(|feed| feed.apply(result));
                        let feed = feed.get_value();
                        let state = feed.view_state();
                        let notice = match state {
                            FeedState::Error => {
                                let message = feed
                                    .error()
                                    .map(ApiError::to_string)
                                    .unwrap_or_default();
                                view! {
                                    <div class="mb-8 p-4 rounded-md border border-red-500/40 bg-red-500/10 text-center">
                                        <p class="text-red-400 mb-3">{message}</p>
                                        <button
                                            class="px-4 py-2 rounded-md border border-neon-green text-neon-green hover:bg-neon-green/10"
                                            on:click=move |_| posts.refetch()
                                        >
                                            "Try again"
                                        </button>
                                    </div>
                                }
                                    .into_any()
                            }
                            FeedState::Fallback => {
                                view! {
                                    <p class="mb-8 p-3 rounded-md bg-yellow-400/10 text-yellow-400 text-sm text-center">
                                        "Preview posts shown while the blog is unavailable."
                                    </p>
                                }
                                    .into_any()
                            }
                            FeedState::Empty => {
                                view! {
                                    <p class="text-center text-light-secondary">
                                        "No blog posts yet. Check back soon."
                                    </p>
                                }
                                    .into_any()
                            }
                            FeedState::Loading | FeedState::Live => ().into_any(),
                        };
                        view! {
                            {notice}
                            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                                {feed
                                    .posts()
                                    .iter()
                                    .cloned()
                                    .map(|post| view! { <PostCard post /> })
                                    .collect_view()}
                            </div>
                        }
                    })}
                </Transition>
            </div>
        </section>
    }
}

#[component]
fn PostCard(post: Post) -> impl IntoView {
    let read_more = match post.link() {
        Some(url) => {
            view! {
                <a href=url.to_string() target="_blank" rel="noopener noreferrer" class="text-neon-green hover:underline">
                    "Read More →"
                </a>
            }
                .into_any()
        }
        None => {
            view! {
                <A href=format!("/blog/{}", post.id) attr:class="text-neon-green hover:underline">
                    "Read More →"
                </A>
            }
                .into_any()
        }
    };

    view! {
        <article class="flex flex-col p-6 rounded-lg bg-dark-secondary border border-light-secondary/10 hover:border-neon-green/40 transition-colors">
            <div class="flex justify-between text-xs text-light-secondary mb-3">
                <span class="px-2 py-1 rounded bg-dark-primary text-neon-green">{post.category}</span>
                <span>{post.read_time}</span>
            </div>
            <h3 class="text-lg font-semibold mb-2">{post.title}</h3>
            <p class="text-light-secondary text-sm mb-4 flex-grow">{post.excerpt}</p>
            <div class="flex justify-between items-center text-sm">
                <span class="text-light-secondary">{post.publish_date}</span>
                {read_more}
            </div>
        </article>
    }
}

#[component]
pub fn BlogPostPage() -> impl IntoView {
    let params = use_params_map();
    let post_id = move || params.get().get("id").unwrap_or_default();
    let post = Resource::new(post_id, |id| async move { flatten(get_post_server(id).await) });

    view! {
        <div class="max-w-3xl mx-auto w-full py-12 px-4">
            <A href="/#blog" attr:class="text-neon-green hover:underline">
                "← Back to portfolio"
            </A>
            <Transition fallback=move || {
                view! {
                    <div class="space-y-4 mt-8">
                        <div class="loading-skeleton h-10 rounded"></div>
                        <div class="loading-skeleton h-6 rounded w-1/2"></div>
                        <div class="loading-skeleton h-64 rounded"></div>
                    </div>
                }
            }>
                {move || Suspend::new(async move {
                    match post.await {
                        Ok(p) => {
                            view! {
                                <Title text=p.title.clone() />
                                <h1 class="text-3xl md:text-4xl font-bold mt-8 mb-4">{p.title.clone()}</h1>
                                <div class="flex flex-wrap gap-4 text-sm text-light-secondary mb-8">
                                    <span class="text-neon-green">{p.category.clone()}</span>
                                    <span>{p.publish_date.clone()}</span>
                                    <span>{p.read_time.clone()}</span>
                                    {p.author.clone().map(|author| view! { <span>"by " {author}</span> })}
                                </div>
                                {p
                                    .featured_image
                                    .clone()
                                    .map(|src| {
                                        view! { <img src=src alt="" class="w-full rounded-lg mb-8" /> }
                                    })}
                                <article class="prose prose-invert max-w-none">
                                    <div inner_html=p.content.clone()></div>
                                </article>
                                {p
                                    .link()
                                    .map(|url| {
                                        view! {
                                            <a
                                                href=url.to_string()
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                class="inline-block mt-8 text-neon-green hover:underline"
                                            >
                                                "Read on Blogger →"
                                            </a>
                                        }
                                    })}
                            }
                                .into_any()
                        }
                        Err(e) => {
                            view! {
                                <Title text="Post unavailable" />
                                <div class="mt-8 p-4 rounded-md border border-red-500/40 bg-red-500/10 text-center">
                                    <p class="text-red-400 mb-3">{e.to_string()}</p>
                                    {e
                                        .is_retryable()
                                        .then(|| {
                                            view! {
                                                <button
                                                    class="px-4 py-2 rounded-md border border-neon-green text-neon-green"
                                                    on:click=move |_| post.refetch()
                                                >
                                                    "Try again"
                                                </button>
                                            }
                                        })}
                                </div>
                            }
                                .into_any()
                        }
                    }
                })}
            </Transition>
        </div>
    }
}
