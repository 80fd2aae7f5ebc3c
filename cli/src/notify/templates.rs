//! Onboarding email templates, compiled into the binary.
//!
//! Each kind has a fixed subject line (a `*_SUBJECT` constant) and an HTML
//! body template registered as `<kind>.html`. Bodies extend `base.html`.
//! Available variables: `name`, `app_url`, `support_email`.

pub const BASE_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
  <style>
    body { font-family: 'Inter', -apple-system, sans-serif; background-color: #0a0a0a; color: #e5e5e5; margin: 0; padding: 0; }
    .container { max-width: 600px; margin: 0 auto; padding: 40px 20px; }
    .header { background: linear-gradient(135deg, #FFD700 0%, #FFA500 100%); padding: 30px; text-align: center; border-radius: 12px; }
    .header h1 { color: #0a0a0a; margin: 0; font-size: 32px; font-weight: 700; }
    .content { background-color: #1a1a1a; padding: 30px; border-radius: 12px; margin-top: 20px; }
    .card { background-color: #2a2a2a; padding: 20px; border-radius: 8px; margin: 15px 0; }
    .stat-number { font-size: 36px; font-weight: 700; color: #FFD700; }
    .button { display: inline-block; background: linear-gradient(135deg, #FFD700 0%, #FFA500 100%); color: #0a0a0a; padding: 14px 28px; text-decoration: none; border-radius: 8px; font-weight: 600; margin: 20px 0; }
    .footer { text-align: center; color: #888888; font-size: 14px; margin-top: 30px; }
  </style>
</head>
<body>
  <div class="container">
    <div class="header"><h1>{% block heading %}{% endblock heading %}</h1></div>
    <div class="content">
{% block content %}{% endblock content %}
    </div>
    <div class="footer">
      <p>&copy; Elevated Media House. All rights reserved.</p>
      <p><a href="mailto:{{ support_email | safe }}" style="color: #FFD700;">Contact Support</a></p>
    </div>
  </div>
</body>
</html>
"#;

pub const WELCOME_SUBJECT: &str = "🎵 Welcome to Elevated Media House!";
pub const WELCOME_HTML: &str = r#"{% extends "base.html" %}
{% block heading %}Welcome to Elevated Media House{% endblock heading %}
{% block content %}
      <h2 style="color: #FFD700;">Hey {{ name }}!</h2>
      <p>Welcome to Elevated Media House! We're thrilled to have you join our community of independent artists building sustainable music careers.</p>
      <p>Your account is now active and ready to use. Here's what you can do right now:</p>
      <ul style="line-height: 1.8;">
        <li>Explore our AI Powerhouse Toolkit with 7 professional tools</li>
        <li>Browse our distribution packages</li>
        <li>Submit your first release</li>
        <li>Access your personalized dashboard</li>
      </ul>
      <p>We're here to support you every step of the way. If you have any questions, just reply to this email!</p>
      <a href="{{ app_url | safe }}/portal" class="button">Go to Dashboard</a>
{% endblock content %}
"#;

pub const TOUR_SUBJECT: &str = "🚀 Your Guided Tour of Elevated Media House";
pub const TOUR_HTML: &str = r#"{% extends "base.html" %}
{% block heading %}🎨 7 AI Tools at Your Fingertips{% endblock heading %}
{% block content %}
      <h2 style="color: #FFD700;">Hi {{ name }},</h2>
      <p>Ready to explore your new AI-powered toolkit? Here's what's waiting for you:</p>
      <div class="card"><strong>🎨 Cover Art Generator</strong><br>Create professional album artwork in seconds</div>
      <div class="card"><strong>✍️ Marketing Copy Writer</strong><br>Generate compelling pitches, bios, and social posts</div>
      <div class="card"><strong>📅 Release Strategy Assistant</strong><br>Get personalized release timing recommendations</div>
      <div class="card"><strong>And 4 more powerful tools!</strong></div>
      <a href="{{ app_url | safe }}/ai-tools" class="button">Explore AI Tools</a>
{% endblock content %}
"#;

pub const FIRST_RELEASE_SUBJECT: &str = "🎶 Ready to Release Your Music?";
pub const FIRST_RELEASE_HTML: &str = r#"{% extends "base.html" %}
{% block heading %}Your Pre-Release Checklist{% endblock heading %}
{% block content %}
      <h2 style="color: #FFD700;">{{ name }}, let's get your music out there!</h2>
      <p>Before you submit your release, make sure you have:</p>
      <div class="card">
        <div>✅ High-quality audio file (WAV or FLAC preferred)</div>
        <div>✅ Cover art (3000x3000px minimum)</div>
        <div>✅ Complete metadata (title, artist name, genre)</div>
        <div>✅ Release date (at least 3-4 weeks out)</div>
        <div>✅ Artist bio and social links</div>
      </div>
      <h3 style="color: #FFD700;">Choose Your Package:</h3>
      <p><strong>Basic ($50-$75):</strong> Perfect for getting started<br>
      <strong>Pro ($150-$200):</strong> Most popular - includes playlist pitching<br>
      <strong>Deluxe ($300-$500):</strong> Full marketing campaign</p>
      <a href="{{ app_url | safe }}/portal" class="button">Submit Your Release</a>
{% endblock content %}
"#;

pub const MARKETING_TIPS_SUBJECT: &str = "📈 Marketing Your Music Like a Pro";
pub const MARKETING_TIPS_HTML: &str = r#"{% extends "base.html" %}
{% block heading %}Your 30-Day Release Strategy{% endblock heading %}
{% block content %}
      <h2 style="color: #FFD700;">Hey {{ name }}!</h2>
      <p>Here's your step-by-step marketing roadmap:</p>
      <div class="card"><strong>Weeks 3-4 Before Release:</strong><br>• Set up pre-save campaign<br>• Start teasing on social media<br>• Pitch to playlists</div>
      <div class="card"><strong>Release Week:</strong><br>• Share on all platforms<br>• Engage with fans<br>• Monitor analytics</div>
      <div class="card"><strong>Weeks 1-4 After:</strong><br>• Share user-generated content<br>• Submit to more playlists<br>• Plan follow-up content</div>
      <p>Pro tip: Use our AI Marketing Copy Writer to create all your promotional content in minutes!</p>
{% endblock content %}
"#;

pub const SUCCESS_STORIES_SUBJECT: &str = "✨ You're Part of Something Special";
pub const SUCCESS_STORIES_HTML: &str = r#"{% extends "base.html" %}
{% block heading %}Welcome to the Community{% endblock heading %}
{% block content %}
      <h2 style="color: #FFD700;">{{ name }}, you're in good company!</h2>
      <p>You're now part of a growing community of successful independent artists:</p>
      <div class="card" style="text-align: center;"><div class="stat-number">100+</div><div>Artists Distributed</div></div>
      <div class="card" style="text-align: center;"><div class="stat-number">50M+</div><div>Total Streams Generated</div></div>
      <div class="card" style="text-align: center;"><div class="stat-number">98%</div><div>Satisfaction Rate</div></div>
      <p>Your success is our success. We're here to support you every step of the way.</p>
      <p>Need help? Have questions? Just reply to this email or reach out at {{ support_email | safe }}</p>
{% endblock content %}
"#;
